#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

pub mod codec;
mod config;
#[cfg(feature = "html")]
pub mod debug_table;
mod error;
mod path_info;
mod source;

// Public API
pub use config::{Config, OptionValue, Separator, Split};
pub use error::{ConfigError, Result};
pub use path_info::{Field, FieldValue, PathInfo};
#[cfg(feature = "std")]
pub use source::EnvPathInfo;
pub use source::PathInfoSource;
