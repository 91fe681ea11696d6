use crate::animation::leaf::LeafAnimation;
use crate::animation::sink::TransformSink;

/// How a container schedules its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// One child at a time, in order.
    Sequence,
    /// Every unfinished child on every tick.
    Parallel,
}

/// A node of an animation tree: a leaf or a nested container.
///
/// Trees are strictly owned; every node has exactly one parent.
#[derive(Debug, Clone)]
pub enum AnimationNode {
    Leaf(LeafAnimation),
    Container(AnimationContainer),
}

impl AnimationNode {
    /// Advances this subtree by one tick.
    #[inline]
    pub fn update(&mut self, sink: &mut dyn TransformSink, ticks_per_second: u32) {
        match self {
            AnimationNode::Leaf(leaf) => leaf.update(sink, ticks_per_second),
            AnimationNode::Container(container) => container.update(sink, ticks_per_second),
        }
    }

    #[inline]
    #[must_use]
    pub fn finished(&self) -> bool {
        match self {
            AnimationNode::Leaf(leaf) => leaf.finished(),
            AnimationNode::Container(container) => container.finished(),
        }
    }

    #[inline]
    #[must_use]
    pub fn running(&self) -> bool {
        match self {
            AnimationNode::Leaf(leaf) => leaf.running(),
            AnimationNode::Container(container) => container.running(),
        }
    }

    /// Clears the runtime state of the whole subtree.
    pub fn reset(&mut self) {
        match self {
            AnimationNode::Leaf(leaf) => leaf.reset(),
            AnimationNode::Container(container) => container.reset(),
        }
    }

    #[must_use]
    pub fn as_leaf(&self) -> Option<&LeafAnimation> {
        match self {
            AnimationNode::Leaf(leaf) => Some(leaf),
            AnimationNode::Container(_) => None,
        }
    }

    #[must_use]
    pub fn as_container(&self) -> Option<&AnimationContainer> {
        match self {
            AnimationNode::Container(container) => Some(container),
            AnimationNode::Leaf(_) => None,
        }
    }
}

impl From<LeafAnimation> for AnimationNode {
    fn from(leaf: LeafAnimation) -> Self {
        AnimationNode::Leaf(leaf)
    }
}

impl From<AnimationContainer> for AnimationNode {
    fn from(container: AnimationContainer) -> Self {
        AnimationNode::Container(container)
    }
}

/// A composite node over an ordered, fixed list of children.
///
/// A sequence keeps no cursor: each tick it updates the first unfinished
/// child, which implicitly advances as earlier children finish. Containers
/// never touch the sink themselves.
#[derive(Debug, Clone)]
pub struct AnimationContainer {
    kind: ContainerKind,
    children: Vec<AnimationNode>,

    running: bool,
    finished: bool,
}

impl AnimationContainer {
    #[must_use]
    pub fn new(kind: ContainerKind, children: Vec<AnimationNode>) -> Self {
        Self {
            kind,
            children,
            running: false,
            finished: false,
        }
    }

    /// Dispatches one tick to the children and recomputes `finished`.
    ///
    /// Only children that were already finished before this tick's dispatch
    /// count towards settling, so a container settles on the tick after its
    /// last child finishes. Each nesting level adds one such tick. An empty
    /// container settles on its first update.
    pub fn update(&mut self, sink: &mut dyn TransformSink, ticks_per_second: u32) {
        let mut settled_children = 0;
        let mut dispatched = false;

        match self.kind {
            ContainerKind::Sequence => {
                for child in &mut self.children {
                    if child.finished() {
                        settled_children += 1;
                    } else {
                        child.update(sink, ticks_per_second);
                        dispatched = true;
                        break;
                    }
                }
            }
            ContainerKind::Parallel => {
                for child in &mut self.children {
                    if child.finished() {
                        settled_children += 1;
                    } else {
                        child.update(sink, ticks_per_second);
                        dispatched = true;
                    }
                }
            }
        }

        self.finished = settled_children == self.children.len();
        self.running = dispatched;
    }

    pub fn reset(&mut self) {
        for child in &mut self.children {
            child.reset();
        }
        self.running = false;
        self.finished = false;
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[AnimationNode] {
        &self.children
    }

    #[inline]
    #[must_use]
    pub fn running(&self) -> bool {
        self.running
    }

    #[inline]
    #[must_use]
    pub fn finished(&self) -> bool {
        self.finished
    }
}
