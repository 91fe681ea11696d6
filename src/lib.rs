#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_inception)]

pub mod animation;
pub mod errors;
pub mod scene;

pub use animation::{
    AnimationContainer, AnimationDesc, AnimationNode, AnimationOptions, AnimationSystem,
    AttributeKind, ContainerKind, EasingType, LeafAnimation, Modifier, TransformSink,
    TransformValue,
};
pub use errors::{AnimationError, Result};
pub use scene::{Node, NodeHandle, Scene, Transform};
