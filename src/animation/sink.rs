use glam::{Quat, Vec3};

/// The mutable transform record an animation tree writes into.
///
/// One sink per animated entity. A leaf reads the sink once when a forward run
/// starts interpolating (to capture its start value) and writes it on every
/// interpolating tick, followed by [`mark_dirty`](TransformSink::mark_dirty).
///
/// # Concurrent writers
///
/// Nothing arbitrates between an animation and other code touching the same
/// sink in the same tick (input handling, editor gizmos, a second animation
/// tree). Whoever writes last wins.
pub trait TransformSink {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);

    fn scale(&self) -> Vec3;
    fn set_scale(&mut self, scale: Vec3);

    fn orientation(&self) -> Quat;
    fn set_orientation(&mut self, orientation: Quat);

    /// Flags the record as changed so derived data (matrices) gets rebuilt.
    fn mark_dirty(&mut self);
}
