//! HTTP transport for the color service.
//!
//! Binds the `/color` resource to [`ColorStore`](crate::color::ColorStore)
//! and [`EmotionEngine`](crate::color::EmotionEngine). Handlers only
//! translate paths, queries and errors; all semantics live in `color`.
//!
//! # Endpoints
//!
//! - `GET  /health`                 - Liveness probe
//! - `GET  /color`                  - Current color
//! - `POST /color/:color`           - Replace current color
//! - `GET  /color/object`           - Current color with channels
//! - `GET  /color/compute-emotion`  - Emotion for `op`, `c1`, `c2`

pub mod routes;

pub use routes::{app_router, ApiError, AppState};
