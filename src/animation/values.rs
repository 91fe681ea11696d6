use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::animation::sink::TransformSink;

pub trait Interpolatable: Copy + Clone + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Quat {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.slerp(end, t)
    }
}

/// Which transform attribute a leaf animation drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Position,    // Modifier is added
    Scale,       // Modifier is multiplied component-wise
    Orientation, // Modifier is composed (quaternion product)
}

/// A value of one transform attribute, tagged with its kind.
///
/// Used both for a leaf's modifier (the delta) and for the endpoints it
/// captures from the sink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformValue {
    Position(Vec3),
    Scale(Vec3),
    Orientation(Quat),
}

/// The delta a leaf applies to the captured start value.
pub type Modifier = TransformValue;

impl TransformValue {
    /// Neutral element of `kind` under [`compose`](Self::compose).
    #[must_use]
    pub fn identity(kind: AttributeKind) -> Self {
        match kind {
            AttributeKind::Position => TransformValue::Position(Vec3::ZERO),
            AttributeKind::Scale => TransformValue::Scale(Vec3::ONE),
            AttributeKind::Orientation => TransformValue::Orientation(Quat::IDENTITY),
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> AttributeKind {
        match self {
            TransformValue::Position(_) => AttributeKind::Position,
            TransformValue::Scale(_) => AttributeKind::Scale,
            TransformValue::Orientation(_) => AttributeKind::Orientation,
        }
    }

    /// Reads the current value of `kind` from the sink.
    #[must_use]
    pub fn read(kind: AttributeKind, sink: &dyn TransformSink) -> Self {
        match kind {
            AttributeKind::Position => TransformValue::Position(sink.position()),
            AttributeKind::Scale => TransformValue::Scale(sink.scale()),
            AttributeKind::Orientation => TransformValue::Orientation(sink.orientation()),
        }
    }

    /// Writes this value into the matching attribute of the sink.
    ///
    /// Does not mark the sink dirty.
    pub fn write(self, sink: &mut dyn TransformSink) {
        match self {
            TransformValue::Position(v) => sink.set_position(v),
            TransformValue::Scale(v) => sink.set_scale(v),
            TransformValue::Orientation(q) => sink.set_orientation(q),
        }
    }

    /// Applies `modifier` to this value: addition for positions, component-wise
    /// multiplication for scales, quaternion product for orientations.
    ///
    /// A modifier of a different kind leaves the value untouched.
    #[must_use]
    pub fn compose(self, modifier: Modifier) -> Self {
        match (self, modifier) {
            (TransformValue::Position(a), TransformValue::Position(b)) => {
                TransformValue::Position(a + b)
            }
            (TransformValue::Scale(a), TransformValue::Scale(b)) => TransformValue::Scale(a * b),
            (TransformValue::Orientation(a), TransformValue::Orientation(b)) => {
                TransformValue::Orientation(a * b)
            }
            _ => {
                log::warn!("Ignoring {:?} modifier on {:?} value", modifier.kind(), self.kind());
                self
            }
        }
    }

    /// Interpolates between two values of the same kind.
    ///
    /// Vectors use linear interpolation, orientations use slerp. Mismatched
    /// kinds return `self`.
    #[must_use]
    pub fn interpolate(self, end: Self, t: f32) -> Self {
        match (self, end) {
            (TransformValue::Position(a), TransformValue::Position(b)) => {
                TransformValue::Position(Vec3::interpolate_linear(a, b, t))
            }
            (TransformValue::Scale(a), TransformValue::Scale(b)) => {
                TransformValue::Scale(Vec3::interpolate_linear(a, b, t))
            }
            (TransformValue::Orientation(a), TransformValue::Orientation(b)) => {
                TransformValue::Orientation(Quat::interpolate_linear(a, b, t))
            }
            _ => self,
        }
    }

    /// The vector payload of a position or scale value.
    #[must_use]
    pub fn as_vec3(&self) -> Option<Vec3> {
        match self {
            TransformValue::Position(v) | TransformValue::Scale(v) => Some(*v),
            TransformValue::Orientation(_) => None,
        }
    }

    /// The quaternion payload of an orientation value.
    #[must_use]
    pub fn as_quat(&self) -> Option<Quat> {
        match self {
            TransformValue::Orientation(q) => Some(*q),
            _ => None,
        }
    }
}
