use crate::compat::{String, ToOwned};
use crate::error::{ConfigError, Result};

const DEFAULT_PAIR_SEPARATOR: &str = "/";
const DEFAULT_KEY_VALUE_SEPARATOR: &str = "-";

/// A non-empty separator, either a literal string or (with the `regex`
/// feature) a pattern.
#[derive(Debug, Clone)]
pub struct Separator(Repr);

#[derive(Debug, Clone)]
enum Repr {
    Literal(String),
    #[cfg(feature = "regex")]
    Pattern(regex::Regex),
}

impl Separator {
    /// Literal separator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySeparator`] for an empty string.
    pub fn literal(sep: &str) -> Result<Self> {
        if sep.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        Ok(Self(Repr::Literal(sep.to_owned())))
    }

    /// Regular expression separator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if the pattern does not compile
    /// and [`ConfigError::EmptySeparator`] if it can match the empty string.
    #[cfg(feature = "regex")]
    pub fn pattern(pattern: &str) -> Result<Self> {
        let re =
            regex::Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern(e.to_string()))?;
        if re.is_match("") {
            return Err(ConfigError::EmptySeparator);
        }
        Ok(Self(Repr::Pattern(re)))
    }

    /// The literal text, or `None` for a pattern
    pub fn as_literal(&self) -> Option<&str> {
        match &self.0 {
            Repr::Literal(sep) => Some(sep),
            #[cfg(feature = "regex")]
            Repr::Pattern(_) => None,
        }
    }

    /// Remove the maximal run of separators at the start of `input`.
    pub fn trim_start<'h>(&self, input: &'h str) -> &'h str {
        match &self.0 {
            Repr::Literal(sep) => {
                let mut rest = input;
                while let Some(stripped) = rest.strip_prefix(sep.as_str()) {
                    rest = stripped;
                }
                rest
            }
            #[cfg(feature = "regex")]
            Repr::Pattern(re) => {
                let mut rest = input;
                while let Some(m) = re.find(rest) {
                    if m.start() != 0 || m.is_empty() {
                        break;
                    }
                    rest = &rest[m.end()..];
                }
                rest
            }
        }
    }

    /// Remove the maximal run of separators at the end of `input`.
    pub fn trim_end<'h>(&self, input: &'h str) -> &'h str {
        match &self.0 {
            Repr::Literal(sep) => {
                let mut rest = input;
                while let Some(stripped) = rest.strip_suffix(sep.as_str()) {
                    rest = stripped;
                }
                rest
            }
            #[cfg(feature = "regex")]
            Repr::Pattern(re) => {
                // Walk matches backwards while they stay contiguous with the end
                let matches: crate::compat::Vec<_> = re.find_iter(input).collect();
                let mut end = input.len();
                for m in matches.iter().rev() {
                    if m.end() != end || m.is_empty() {
                        break;
                    }
                    end = m.start();
                }
                &input[..end]
            }
        }
    }

    /// Split `input` on every separator occurrence.
    pub fn split<'s, 'h>(&'s self, input: &'h str) -> Split<'s, 'h> {
        match &self.0 {
            Repr::Literal(sep) => Split::Literal(input.split(sep.as_str())),
            #[cfg(feature = "regex")]
            Repr::Pattern(re) => Split::Pattern(re.split(input)),
        }
    }

    /// Split `input` at the first separator occurrence only.
    pub fn split_once<'h>(&self, input: &'h str) -> Option<(&'h str, &'h str)> {
        match &self.0 {
            Repr::Literal(sep) => input.split_once(sep.as_str()),
            #[cfg(feature = "regex")]
            Repr::Pattern(re) => re
                .find(input)
                .map(|m| (&input[..m.start()], &input[m.end()..])),
        }
    }
}

/// Iterator over the pieces produced by [`Separator::split`]
pub enum Split<'s, 'h> {
    Literal(core::str::Split<'h, &'s str>),
    #[cfg(feature = "regex")]
    Pattern(regex::Split<'s, 'h>),
}

impl<'h> Iterator for Split<'_, 'h> {
    type Item = &'h str;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Literal(it) => it.next(),
            #[cfg(feature = "regex")]
            Self::Pattern(it) => it.next(),
        }
    }
}

/// Value supplied for a named option in [`Config::from_options`]
#[derive(Debug, Clone)]
pub enum OptionValue {
    Text(String),
    Flag(bool),
    Separator(Separator),
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<Separator> for OptionValue {
    fn from(sep: Separator) -> Self {
        Self::Separator(sep)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionKey {
    PairSeparator,
    KeyValueSeparator,
    StripLeadingSeparator,
    StripTrailingSeparator,
}

impl OptionKey {
    /// Case-insensitive match on the camelCase or snake_case spelling.
    fn lookup(key: &str) -> Option<Self> {
        [
            Self::PairSeparator,
            Self::KeyValueSeparator,
            Self::StripLeadingSeparator,
            Self::StripTrailingSeparator,
        ]
        .into_iter()
        .find(|option| {
            key.eq_ignore_ascii_case(option.name())
                || key.eq_ignore_ascii_case(option.camel_case_name())
        })
    }

    fn camel_case_name(self) -> &'static str {
        match self {
            Self::PairSeparator => "pairSeparator",
            Self::KeyValueSeparator => "keyValueSeparator",
            Self::StripLeadingSeparator => "stripLeadingSeparator",
            Self::StripTrailingSeparator => "stripTrailingSeparator",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::PairSeparator => "pair_separator",
            Self::KeyValueSeparator => "key_value_separator",
            Self::StripLeadingSeparator => "strip_leading_separator",
            Self::StripTrailingSeparator => "strip_trailing_separator",
        }
    }
}

/// Decoder configuration. Immutable once attached to a
/// [`PathInfo`](crate::PathInfo).
#[derive(Debug, Clone)]
pub struct Config {
    pair_separator: Separator,
    key_value_separator: Separator,
    strip_leading_separator: bool,
    strip_trailing_separator: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pair_separator: Separator(Repr::Literal(DEFAULT_PAIR_SEPARATOR.to_owned())),
            key_value_separator: Separator(Repr::Literal(
                DEFAULT_KEY_VALUE_SEPARATOR.to_owned(),
            )),
            strip_leading_separator: true,
            strip_trailing_separator: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from named options, starting from the defaults.
    ///
    /// Recognized keys (case-insensitive): `pair_separator`,
    /// `key_value_separator`, `strip_leading_separator`,
    /// `strip_trailing_separator`. Text values for separators are literals.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownOption`] for an unrecognized key,
    /// [`ConfigError::InvalidOptionValue`] for a value of the wrong kind and
    /// [`ConfigError::EmptySeparator`] for an empty separator.
    pub fn from_options<I, K, V>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<OptionValue>,
    {
        let mut config = Self::default();
        for (key, value) in options {
            let key = key.as_ref();
            let option =
                OptionKey::lookup(key).ok_or_else(|| ConfigError::UnknownOption(key.to_owned()))?;
            match (option, value.into()) {
                (OptionKey::PairSeparator, OptionValue::Text(sep)) => {
                    config.pair_separator = Separator::literal(&sep)?;
                }
                (OptionKey::PairSeparator, OptionValue::Separator(sep)) => {
                    config.pair_separator = sep;
                }
                (OptionKey::KeyValueSeparator, OptionValue::Text(sep)) => {
                    config.key_value_separator = Separator::literal(&sep)?;
                }
                (OptionKey::KeyValueSeparator, OptionValue::Separator(sep)) => {
                    config.key_value_separator = sep;
                }
                (OptionKey::StripLeadingSeparator, OptionValue::Flag(flag)) => {
                    config.strip_leading_separator = flag;
                }
                (OptionKey::StripTrailingSeparator, OptionValue::Flag(flag)) => {
                    config.strip_trailing_separator = flag;
                }
                (option, _) => return Err(ConfigError::InvalidOptionValue(option.name())),
            }
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_pair_separator(mut self, sep: Separator) -> Self {
        self.pair_separator = sep;
        self
    }

    #[must_use]
    pub fn with_key_value_separator(mut self, sep: Separator) -> Self {
        self.key_value_separator = sep;
        self
    }

    #[must_use]
    pub fn strip_leading(mut self, strip: bool) -> Self {
        self.strip_leading_separator = strip;
        self
    }

    #[must_use]
    pub fn strip_trailing(mut self, strip: bool) -> Self {
        self.strip_trailing_separator = strip;
        self
    }

    pub fn pair_separator(&self) -> &Separator {
        &self.pair_separator
    }

    pub fn key_value_separator(&self) -> &Separator {
        &self.key_value_separator
    }

    pub fn strips_leading(&self) -> bool {
        self.strip_leading_separator
    }

    pub fn strips_trailing(&self) -> bool {
        self.strip_trailing_separator
    }

    /// Literal text used when writing pairs back out. Pattern separators
    /// fall back to the defaults.
    pub(crate) fn serialized_separators(&self) -> (&str, &str) {
        (
            self.pair_separator
                .as_literal()
                .unwrap_or(DEFAULT_PAIR_SEPARATOR),
            self.key_value_separator
                .as_literal()
                .unwrap_or(DEFAULT_KEY_VALUE_SEPARATOR),
        )
    }
}
