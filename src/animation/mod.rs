//! Animation module
//!
//! Tick-quantized animation trees:
//! - [`easing`]: progress remapping curves
//! - [`LeafAnimation`]: one position / scale / orientation transition with
//!   delay, repeat and reverse handling
//! - [`AnimationContainer`]: sequence and parallel composition
//! - [`AnimationSystem`]: the per-tick driver over a [`Scene`](crate::scene::Scene)
//! - [`AnimationDesc`]: serde-friendly tree descriptions

pub mod builder;
pub mod container;
pub mod desc;
pub mod easing;
pub mod leaf;
pub mod options;
pub mod sink;
pub mod system;
pub mod values;

pub use builder::{leaf, orientation, parallel, position, scale, sequence};
pub use container::{AnimationContainer, AnimationNode, ContainerKind};
pub use desc::AnimationDesc;
pub use easing::{EasingType, ease};
pub use leaf::LeafAnimation;
pub use options::AnimationOptions;
pub use sink::TransformSink;
pub use system::AnimationSystem;
pub use values::{AttributeKind, Interpolatable, Modifier, TransformValue};
