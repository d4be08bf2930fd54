//! Color state and emotion computation.
//!
//! # Architecture
//!
//! ```text
//! ColorStore      current color behind a readers-writer lock
//!   ↓  get_structured()
//! named / codec   well-known names, or six hex digits → Rgb
//!
//! EmotionEngine   pure: (op, c1, c2) → codec → Blend → Emotion
//! ```
//!
//! # Example
//!
//! ```rust
//! use colorservice::color::{ColorStore, Emotion, EmotionEngine};
//!
//! let store = ColorStore::new();
//! store.set("0a0b0c");
//! assert_eq!(store.get_structured().unwrap().g, 12);
//!
//! let engine = EmotionEngine::new();
//! let emotion = engine.compute_emotion("add", "0a0a0a", "050505").unwrap();
//! assert_eq!(emotion, Emotion::Willpower);
//! ```

pub mod codec;
pub mod emotion;
pub mod error;
pub mod named;
pub mod store;

// Re-exports
pub use codec::{Channel, Rgb};
pub use emotion::{Blend, Emotion, EmotionEngine, IndexPolicy, Operator};
pub use error::{ColorError, ErrorKind};
pub use store::{ColorObject, ColorStore, DEFAULT_COLOR};
