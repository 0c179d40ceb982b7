//! Number formatting used in embeds: skill levels as roman numerals and
//! compact coin totals.

const ROMAN_NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

const SCIENTIFIC_SUFFIXES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "k")];

/// Formats a number in subtractive roman notation. Zero yields an empty string.
pub fn as_roman_numeral(mut value: u32) -> String {
    let mut result = String::new();

    for (amount, numeral) in ROMAN_NUMERALS {
        while value >= amount {
            result.push_str(numeral);
            value -= amount;
        }
    }

    result
}

/// Rounds half away from zero to the given number of decimal places.
pub fn round(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Formats large numbers with a k/M/B/T suffix and two decimals at most.
///
/// Values below one thousand are printed as whole numbers. Suffixed values always
/// keep at least one decimal place, so `1000` becomes `1.0k`.
pub fn as_scientific_number(value: f64) -> String {
    for (threshold, suffix) in SCIENTIFIC_SUFFIXES {
        if value.abs() >= threshold {
            let scaled = round(value / threshold, 2);
            return if scaled.fract() == 0.0 {
                format!("{:.1}{}", scaled, suffix)
            } else {
                format!("{}{}", scaled, suffix)
            };
        }
    }

    format!("{}", value.trunc() as i64)
}
