mod compile;
mod dump;
mod error;
mod merge;
mod node;
mod route_tree;
mod traversal;

pub use compile::compile_route;
pub use dump::NodeDump;
pub use error::{TreeError, TreeResult};
pub use node::{NodeType, RouteNode};
pub use route_tree::RouteTree;
