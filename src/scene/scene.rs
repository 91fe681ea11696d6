use slotmap::{SecondaryMap, SlotMap};

use crate::animation::AnimationNode;
use crate::errors::{AnimationError, Result};
use crate::scene::NodeHandle;
use crate::scene::node::Node;

/// Component store for animated entities.
///
/// Nodes live in a [`SlotMap`]; animation roots are an optional component kept
/// in a [`SecondaryMap`] under the same handle. A root stays attached after it
/// settles until it is detached, replaced, or its node is removed.
#[derive(Debug, Default)]
pub struct Scene {
    pub(crate) nodes: SlotMap<NodeHandle, Node>,
    pub(crate) animations: SecondaryMap<NodeHandle, AnimationNode>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            animations: SecondaryMap::new(),
        }
    }

    // ========================================================================
    // Nodes
    // ========================================================================

    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        self.nodes.insert(node)
    }

    pub fn create_node(&mut self) -> NodeHandle {
        self.add_node(Node::new())
    }

    pub fn create_node_with_name(&mut self, name: &str) -> NodeHandle {
        self.add_node(Node::with_name(name))
    }

    /// Removes a node together with its animation, if any.
    pub fn remove_node(&mut self, handle: NodeHandle) -> Option<Node> {
        if self.animations.remove(handle).is_some() {
            log::debug!("Dropped animation of removed node {handle:?}");
        }
        self.nodes.remove(handle)
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ========================================================================
    // Animation components
    // ========================================================================

    /// Attaches `root` to a node, returning the root it replaces.
    pub fn attach_animation(
        &mut self,
        handle: NodeHandle,
        root: impl Into<AnimationNode>,
    ) -> Result<Option<AnimationNode>> {
        if !self.nodes.contains_key(handle) {
            return Err(AnimationError::NodeNotFound(handle));
        }

        let previous = self.animations.insert(handle, root.into());
        if previous.is_some() {
            log::debug!("Replaced animation on node {handle:?}");
        } else {
            log::debug!("Attached animation to node {handle:?}");
        }
        Ok(previous)
    }

    /// Detaches and returns the animation of a node. This is the only way to
    /// cancel a running animation.
    pub fn detach_animation(&mut self, handle: NodeHandle) -> Option<AnimationNode> {
        let root = self.animations.remove(handle);
        if root.is_some() {
            log::debug!("Detached animation from node {handle:?}");
        }
        root
    }

    #[must_use]
    pub fn animation(&self, handle: NodeHandle) -> Option<&AnimationNode> {
        self.animations.get(handle)
    }

    pub fn animation_mut(&mut self, handle: NodeHandle) -> Option<&mut AnimationNode> {
        self.animations.get_mut(handle)
    }

    /// Number of nodes with an attached animation, settled or not.
    #[must_use]
    pub fn animated_count(&self) -> usize {
        self.animations.len()
    }

    /// Iterates all nodes that own an animation root.
    pub fn iter_animations(&self) -> impl Iterator<Item = (NodeHandle, &AnimationNode)> {
        self.animations.iter()
    }
}
