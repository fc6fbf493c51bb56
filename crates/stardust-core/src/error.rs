//! Error types for parsing user-facing configuration.
//!
//! Generation and animation are infallible; only the text inputs coming from
//! query strings, command lines and color pickers can fail.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex color `{0}` (expected #rgb or #rrggbb)")]
    InvalidHex(String),
    #[error("unknown color name `{0}`")]
    UnknownName(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamError {
    #[error("unknown parameter `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("`{key}` = {value} is outside {min}..={max}")]
    OutOfRange {
        key: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error(transparent)]
    Color(#[from] ColorParseError),
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("unknown demo `{0}` (expected galaxy, particles, house, lights or scroll)")]
pub struct DemoParseError(pub String);
