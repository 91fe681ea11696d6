//! Declarative animation trees.
//!
//! An [`AnimationDesc`] is plain data: it can be stored in level files or
//! config and turned into a fresh runtime tree as often as needed.
//!
//! ```json
//! {
//!   "type": "sequence",
//!   "children": [
//!     { "type": "position", "modifier": [10.0, 0.0, 0.0], "duration_ms": 1000 },
//!     { "type": "scale", "modifier": [2.0, 2.0, 2.0], "duration_ms": 500,
//!       "options": { "easing_type": "ease_out", "reverse": true, "reverse_count": 1 } }
//!   ]
//! }
//! ```

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::animation::builder;
use crate::animation::container::AnimationNode;
use crate::animation::options::AnimationOptions;
use crate::errors::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnimationDesc {
    Position {
        modifier: Vec3,
        duration_ms: u32,
        #[serde(default)]
        options: AnimationOptions,
    },
    Scale {
        modifier: Vec3,
        duration_ms: u32,
        #[serde(default)]
        options: AnimationOptions,
    },
    Orientation {
        /// `[x, y, z, w]`
        modifier: Quat,
        duration_ms: u32,
        #[serde(default)]
        options: AnimationOptions,
    },
    Sequence {
        children: Vec<AnimationDesc>,
    },
    Parallel {
        children: Vec<AnimationDesc>,
    },
}

impl AnimationDesc {
    /// Parses a description from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes this description to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds a new runtime tree in its initial state.
    #[must_use]
    pub fn build(&self) -> AnimationNode {
        match self {
            AnimationDesc::Position {
                modifier,
                duration_ms,
                options,
            } => builder::position(*modifier, *duration_ms, *options),
            AnimationDesc::Scale {
                modifier,
                duration_ms,
                options,
            } => builder::scale(*modifier, *duration_ms, *options),
            AnimationDesc::Orientation {
                modifier,
                duration_ms,
                options,
            } => builder::orientation(unit_rotation(*modifier), *duration_ms, *options),
            AnimationDesc::Sequence { children } => {
                builder::sequence(children.iter().map(AnimationDesc::build))
            }
            AnimationDesc::Parallel { children } => {
                builder::parallel(children.iter().map(AnimationDesc::build))
            }
        }
    }
}

/// Normalizes a rotation read from data. A zero quaternion has no direction
/// and becomes the identity.
fn unit_rotation(rotation: Quat) -> Quat {
    if rotation.length_squared() > f32::EPSILON {
        rotation.normalize()
    } else {
        log::warn!("Zero orientation modifier in animation description, using identity");
        Quat::IDENTITY
    }
}
