//! Scene module
//!
//! The pieces an animation tree needs from the outside world:
//! - Transform: the position / rotation / scale record animations write into
//! - Node: an entity carrying a transform
//! - Scene: the store that owns nodes and their animation roots

pub mod node;
pub mod scene;
pub mod transform;

pub use node::Node;
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
}
