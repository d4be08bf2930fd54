//! # colorservice
//!
//! An in-memory "current color" resource and an emotion calculator.
//!
//! The store keeps one color string behind a readers-writer lock. The
//! calculator combines two six-digit hex colors channel by channel with a
//! named operator (`add`, `sub`, `mul`, `div`) and maps the summed result
//! onto a fixed table of seven emotions. The [`server`] module exposes both
//! over HTTP.

pub mod color;
pub mod config;
pub mod server;

pub use color::{
    ColorError, ColorObject, ColorStore, Emotion, EmotionEngine, ErrorKind, IndexPolicy, Operator,
    Rgb,
};
pub use config::ServiceConfig;

/// Crate version reported by the health endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
