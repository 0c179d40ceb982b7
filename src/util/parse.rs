use sea_orm::DbErr;

use crate::error::internal::InternalError;

/// Parses a Discord snowflake stored as text.
///
/// # Arguments
/// - `value` - Stored column value
/// - `field` - Column name, included in the error message
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed snowflake
/// - `Err(DbErr::Custom)` - Wrapping `InternalError::ParseStringId`, the stored value is not a number
pub fn parse_snowflake(value: &str, field: &str) -> Result<u64, DbErr> {
    value.parse::<u64>().map_err(|e| {
        let err = InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        };
        DbErr::Custom(format!("Invalid {}: {}", field, err))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_snowflake() {
        assert_eq!(
            parse_snowflake("123456789012345678", "guild_id").unwrap(),
            123456789012345678
        );
    }

    #[test]
    fn rejects_invalid_snowflake() {
        let err = parse_snowflake("abc", "guild_id").unwrap_err();
        assert!(err.to_string().contains("guild_id"));
        assert!(err.to_string().contains("'abc'"));
        assert!(parse_snowflake("", "role_id").is_err());
    }
}
