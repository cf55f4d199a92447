//! Shared types for the BYK ordering core
//!
//! Domain models, status lifecycle and utility types used by both the
//! cart/reservation core and the presentation/transport layers.

pub mod models;
pub mod status;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
pub use status::{HasStatus, IllegalTransition, Status};
