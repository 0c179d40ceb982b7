use std::collections::HashMap;

/// Replaces every `%key%` in `template` with its value.
///
/// Unknown placeholders are left untouched so a missing value is visible in chat
/// rather than silently dropped.
pub fn format_placeholders(template: &str, placeholders: &HashMap<&str, String>) -> String {
    let mut message = template.to_string();
    for (key, value) in placeholders {
        message = message.replace(&format!("%{}%", key), value);
    }
    message
}

/// Lowercase name with spaces replaced by underscores, used as select option values.
pub fn component_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Discord relative timestamp markup, rendered client-side as "in 5 minutes".
pub fn discord_relative_timestamp(unix_seconds: i64) -> String {
    format!("<t:{}:R>", unix_seconds)
}

/// Compact duration such as `1h 5m 3s`, leading zero units omitted.
pub fn format_duration(total_secs: i64) -> String {
    let total_secs = total_secs.max(0);
    let (hours, minutes, seconds) = (total_secs / 3600, total_secs % 3600 / 60, total_secs % 60);

    match (hours, minutes) {
        (0, 0) => format!("{}s", seconds),
        (0, _) => format!("{}m {}s", minutes, seconds),
        _ => format!("{}h {}m {}s", hours, minutes, seconds),
    }
}

/// Builds a placeholder map from `(key, value)` pairs.
pub fn placeholders<const N: usize>(pairs: [(&'static str, String); N]) -> HashMap<&'static str, String> {
    pairs.into_iter().collect()
}
