use crate::scene::transform::Transform;

/// A minimal scene entity: a name and a transform.
///
/// Animation trees are not stored on the node itself; [`Scene`](crate::scene::Scene)
/// keeps them in a component map keyed by the node's handle.
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub name: Option<String>,
    pub transform: Transform,
}

impl Node {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            transform: Transform::new(),
        }
    }

    #[must_use]
    pub fn with_transform(transform: Transform) -> Self {
        Self {
            name: None,
            transform,
        }
    }
}
