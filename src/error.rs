use crate::compat::String;

/// Errors raised while configuring a decoder or assigning fields.
///
/// Decoding itself never fails: tuples without a key/value separator are
/// dropped and malformed percent-escapes are kept literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Option key not recognized (keys are matched case-insensitively)
    UnknownOption(String),
    /// Option value has the wrong kind for its key
    InvalidOptionValue(&'static str),
    /// Separator is empty or matches the empty string
    EmptySeparator,
    /// Separator pattern failed to compile
    InvalidPattern(String),
    /// Flat name/value argument list did not pair up
    OddArgumentCount(usize),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownOption(key) => write!(f, "Unknown option: {key}"),
            Self::InvalidOptionValue(key) => write!(f, "Invalid value for option {key}"),
            Self::EmptySeparator => f.write_str("Separator must not be empty"),
            Self::InvalidPattern(reason) => write!(f, "Invalid separator pattern: {reason}"),
            Self::OddArgumentCount(count) => {
                write!(f, "Odd number of name/value arguments: {count}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Result type for configuration and assignment operations
pub type Result<T> = core::result::Result<T, ConfigError>;
