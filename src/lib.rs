pub mod path;
pub mod pattern;
pub mod router;
pub mod tree;
pub mod types;

pub use pattern::{Params, RouteOption};
pub use router::{
    Router, RouterError, RouterOptions, RouterOptionsBuilder, RouterOptionsError, RouterResult,
};
pub use tree::{NodeDump, NodeType, RouteNode, RouteTree, TreeError, TreeResult, compile_route};
pub use types::{CATCH_ALL_TOKEN, Depth, UNBOUNDED_DEPTH};
