//! Error Types
//!
//! The timing core itself never fails: numeric edge cases (zero durations,
//! zero delays) are clamped rather than signalled. Errors only come from the
//! surfaces around it:
//! - constructing the driver with an unusable tick rate
//! - attaching animations to nodes that are not in the store
//! - parsing declarative animation descriptions
//!
//! ```rust,ignore
//! use tempo::errors::Result;
//! use tempo::animation::AnimationSystem;
//!
//! fn make_driver() -> Result<AnimationSystem> {
//!     AnimationSystem::new(60)
//! }
//! ```

use thiserror::Error;

use crate::scene::NodeHandle;

/// The main error type for the animation crate.
#[derive(Error, Debug)]
pub enum AnimationError {
    /// The driver needs at least one tick per second.
    #[error("Invalid tick rate: {0} ticks per second")]
    InvalidTickRate(u32),

    /// The node handle does not refer to a live node.
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeHandle),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for `Result<T, AnimationError>`.
pub type Result<T> = std::result::Result<T, AnimationError>;
