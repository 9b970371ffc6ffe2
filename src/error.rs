//! Error types for the bazi crate.

/// Error type for all fallible operations in the bazi crate.
///
/// Every variant describes missing or malformed chart data. Gaps in the
/// association tables are not errors and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The mapping source holds no record for the requested date.
    #[error("no date mapping found for {year}-{month}-{day}")]
    MappingNotFound { year: i32, month: u32, day: u32 },

    /// A mapping record carries a 1-based index outside its cycle.
    #[error("invalid {field} index: {value} (must be 1..={max})")]
    InvalidIndex {
        /// Name of the record field, e.g. `HDay`.
        field: &'static str,
        value: i32,
        max: i32,
    },

    /// A pillar label that is not exactly one stem followed by one branch.
    #[error("invalid pillar: {label:?}")]
    InvalidPillar { label: String },

    /// A year/month/day triple that is not a Gregorian calendar date.
    #[error("invalid date: {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// A mapping table could not be read or parsed.
    #[error("failed to load date mappings from {origin}: {reason}")]
    MappingLoad { origin: String, reason: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_mapping_not_found() {
        let err = Error::MappingNotFound {
            year: 1990,
            month: 1,
            day: 1,
        };
        assert_eq!(err.to_string(), "no date mapping found for 1990-1-1");
    }

    #[test]
    fn error_invalid_index() {
        let err = Error::InvalidIndex {
            field: "EDay",
            value: 13,
            max: 12,
        };
        assert_eq!(err.to_string(), "invalid EDay index: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_pillar() {
        let err = Error::InvalidPillar {
            label: "甲".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid pillar: \"甲\"");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<Error>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<Error>();
    }
}
