//! Where the raw path information comes from.
//!
//! The decoder itself never touches process state; callers hand it a string
//! or anything implementing [`PathInfoSource`].

use crate::compat::{Cow, String};

/// Supplies the raw path-information string for the current request.
pub trait PathInfoSource {
    /// Raw path information, empty when the request carries none.
    fn path_info(&self) -> Cow<'_, str>;
}

impl PathInfoSource for str {
    fn path_info(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl PathInfoSource for String {
    fn path_info(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl<T: PathInfoSource + ?Sized> PathInfoSource for &T {
    fn path_info(&self) -> Cow<'_, str> {
        (**self).path_info()
    }
}

/// An absent source yields the empty string.
impl<T: PathInfoSource> PathInfoSource for Option<T> {
    fn path_info(&self) -> Cow<'_, str> {
        match self {
            Some(source) => source.path_info(),
            None => Cow::Borrowed(""),
        }
    }
}

/// Reads path information from an environment variable, `PATH_INFO` by
/// default (the CGI convention). A missing variable reads as empty.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct EnvPathInfo {
    var: Cow<'static, str>,
}

#[cfg(feature = "std")]
impl Default for EnvPathInfo {
    fn default() -> Self {
        Self {
            var: Cow::Borrowed("PATH_INFO"),
        }
    }
}

#[cfg(feature = "std")]
impl EnvPathInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read from `var` instead of `PATH_INFO`.
    pub fn with_var(var: impl Into<Cow<'static, str>>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

#[cfg(feature = "std")]
impl PathInfoSource for EnvPathInfo {
    fn path_info(&self) -> Cow<'_, str> {
        std::env::var_os(&*self.var).map_or(Cow::Borrowed(""), |value| {
            Cow::Owned(value.to_string_lossy().into_owned())
        })
    }
}
