use std::{error, fmt};

use sightline_core::ConfigError;
use wasm_bindgen::JsValue;

/// The error type of the Web backend.
#[derive(Debug, Clone, PartialEq)]
pub enum WebError {
    /// The watcher configuration is invalid.
    Config(ConfigError),
    /// The browser threw an exception, stringified.
    Js(String),
    /// No element matches the selector.
    TargetNotFound(String),
    /// Running outside of a window context, e.g. in a worker.
    NoDocument,
}

impl From<ConfigError> for WebError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            WebError::Config(err) => write!(f, "invalid watcher configuration: {err}"),
            WebError::Js(err) => write!(f, "browser error: {err}"),
            WebError::TargetNotFound(selector) => write!(f, "no element matches `{selector}`"),
            WebError::NoDocument => f.pad("no document available in this context"),
        }
    }
}

impl error::Error for WebError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            WebError::Config(err) => Some(err),
            _ => None,
        }
    }
}
