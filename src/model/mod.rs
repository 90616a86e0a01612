//! # Graph Model
//!
//! Plain data shared by the backends and the path-finding engine.
//! No locking and no traversal logic lives here.

pub mod node_set;
pub mod edge;
pub mod path;
pub mod resolver;

pub use node_set::{NodeKey, NodeSet};
pub use edge::{NodePair, Direction, Payload};
pub use path::{Algorithm, PathResult};
pub use resolver::{Resolvers, EdgeLengthFn, NodeScoreFn};
