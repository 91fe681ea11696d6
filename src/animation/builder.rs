//! Free functions for assembling animation trees in code.
//!
//! ```rust,ignore
//! use glam::{Quat, Vec3};
//! use tempo::animation::builder::{orientation, parallel, position, scale, sequence};
//! use tempo::animation::{AnimationOptions, EasingType};
//!
//! let smooth = AnimationOptions::new().with_easing(EasingType::EaseInOut);
//! let root = sequence([
//!     position(Vec3::new(-500.0, -200.0, 0.0), 2000, smooth),
//!     parallel([
//!         position(Vec3::new(0.0, 500.0, 0.0), 2000, smooth),
//!         sequence([
//!             scale(Vec3::splat(0.5), 500, AnimationOptions::default()),
//!             scale(Vec3::splat(2.0), 500, AnimationOptions::default()),
//!         ]),
//!         orientation(Quat::from_rotation_z(1.0), 1000, smooth),
//!     ]),
//! ]);
//! ```

use glam::{Quat, Vec3};

use crate::animation::container::{AnimationContainer, AnimationNode, ContainerKind};
use crate::animation::leaf::LeafAnimation;
use crate::animation::options::AnimationOptions;
use crate::animation::values::Modifier;

/// A leaf node; the attribute kind is carried by the modifier.
#[must_use]
pub fn leaf(modifier: Modifier, duration_ms: u32, options: AnimationOptions) -> AnimationNode {
    AnimationNode::Leaf(LeafAnimation::new(modifier, duration_ms, options))
}

/// Moves by `offset`.
#[must_use]
pub fn position(offset: Vec3, duration_ms: u32, options: AnimationOptions) -> AnimationNode {
    leaf(Modifier::Position(offset), duration_ms, options)
}

/// Scales by `factor`, component-wise.
#[must_use]
pub fn scale(factor: Vec3, duration_ms: u32, options: AnimationOptions) -> AnimationNode {
    leaf(Modifier::Scale(factor), duration_ms, options)
}

/// Rotates by `rotation`, applied after the current orientation.
#[must_use]
pub fn orientation(rotation: Quat, duration_ms: u32, options: AnimationOptions) -> AnimationNode {
    leaf(Modifier::Orientation(rotation), duration_ms, options)
}

/// Runs `children` one after the other.
#[must_use]
pub fn sequence(children: impl IntoIterator<Item = AnimationNode>) -> AnimationNode {
    AnimationNode::Container(AnimationContainer::new(
        ContainerKind::Sequence,
        children.into_iter().collect(),
    ))
}

/// Runs `children` side by side.
#[must_use]
pub fn parallel(children: impl IntoIterator<Item = AnimationNode>) -> AnimationNode {
    AnimationNode::Container(AnimationContainer::new(
        ContainerKind::Parallel,
        children.into_iter().collect(),
    ))
}
