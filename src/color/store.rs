//! Shared current-color state.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::codec;
use super::error::ColorError;
use super::named;

/// Value a new store starts with.
pub const DEFAULT_COLOR: &str = "white";

/// Structured view of the current color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorObject {
    pub name: String,
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

/// Holds the current color behind a readers-writer lock.
///
/// Reads share the lock and run in parallel; [`ColorStore::set`] takes it
/// exclusively. Nothing is validated on write.
#[derive(Debug)]
pub struct ColorStore {
    color: RwLock<String>,
}

impl Default for ColorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorStore {
    pub fn new() -> Self {
        Self::with_color(DEFAULT_COLOR)
    }

    pub fn with_color(color: impl Into<String>) -> Self {
        Self {
            color: RwLock::new(color.into()),
        }
    }

    /// Current color, verbatim.
    pub fn get(&self) -> String {
        self.color.read().clone()
    }

    /// Replace the current color.
    pub fn set(&self, color: impl Into<String>) {
        let color = color.into();
        let mut guard = self.color.write();
        tracing::debug!(previous = %guard.as_str(), current = %color, "Color updated");
        *guard = color;
    }

    /// Run `f` against the current color while holding the read lock.
    ///
    /// `f` must not call [`ColorStore::set`] on the same store: the write
    /// lock waits for this read guard, so that call deadlocks.
    pub fn with_current<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        let guard = self.color.read();
        f(&guard)
    }

    /// Current color with its channel values.
    ///
    /// Well-known HTML names resolve to their fixed values. Anything else
    /// must be a six-digit hex color and goes through [`codec::parse`];
    /// the second pair is reported as `b` and the third as `g`.
    pub fn get_structured(&self) -> Result<ColorObject, ColorError> {
        let name = self.get();

        if let Some((r, g, b)) = named::lookup(&name) {
            return Ok(ColorObject {
                name,
                r: r.into(),
                g: g.into(),
                b: b.into(),
            });
        }

        let rgb = codec::parse(&name)?;
        Ok(ColorObject {
            name,
            r: rgb.red.into(),
            g: rgb.green.into(),
            b: rgb.blue.into(),
        })
    }
}
