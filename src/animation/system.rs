use crate::errors::{AnimationError, Result};
use crate::scene::Scene;

/// Animation system.
///
/// Drives every unsettled animation root in a [`Scene`] by one tick. It owns
/// no clock: call [`update`](Self::update) exactly once per fixed simulation
/// tick of the host loop.
#[derive(Debug, Clone, Copy)]
pub struct AnimationSystem {
    ticks_per_second: u32,
}

impl AnimationSystem {
    /// Creates a driver for a loop running at `ticks_per_second`.
    pub fn new(ticks_per_second: u32) -> Result<Self> {
        if ticks_per_second == 0 {
            return Err(AnimationError::InvalidTickRate(ticks_per_second));
        }
        log::debug!("Animation system running at {ticks_per_second} ticks per second");
        Ok(Self { ticks_per_second })
    }

    #[inline]
    #[must_use]
    pub fn ticks_per_second(&self) -> u32 {
        self.ticks_per_second
    }

    /// Advances all unsettled animation roots by one tick.
    ///
    /// Settled roots stay attached but are skipped. Returns how many roots were
    /// ticked.
    pub fn update(&self, scene: &mut Scene) -> usize {
        let mut ticked = 0;

        // Disjoint field borrows: roots from the component map, sinks from the nodes.
        let Scene { nodes, animations } = scene;

        for (handle, root) in animations.iter_mut() {
            if root.finished() {
                continue;
            }

            let Some(node) = nodes.get_mut(handle) else {
                log::warn!("Animated node {handle:?} no longer exists, skipping");
                continue;
            };

            root.update(&mut node.transform, self.ticks_per_second);
            ticked += 1;

            if root.finished() {
                log::debug!("Animation on node {handle:?} finished");
            }
        }

        ticked
    }
}
