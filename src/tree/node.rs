use serde::{Deserialize, Serialize};

use crate::pattern::Params;
use crate::types::{Depth, UNBOUNDED_DEPTH};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeType {
    Root,
    Static,
    Param,
    CatchAll,
}

/// One segment of one or more merged route definitions.
///
/// `H` is the handler binding. The tree only ever checks whether it is present.
#[derive(Debug, Clone)]
pub struct RouteNode<H> {
    pub(crate) node_type: NodeType,
    pub(crate) path: String,
    pub(crate) param_path: String,
    pub(crate) params: Params,
    pub(crate) cur_depth: Depth,
    pub(crate) max_depth: Depth,
    pub(crate) handler: Option<H>,
    pub(crate) children: Vec<RouteNode<H>>,
}

impl<H> RouteNode<H> {
    /// The structural root: no path, never a match target.
    pub fn root() -> Self {
        Self::new(NodeType::Root, String::new(), 0, 0)
    }

    pub(crate) fn new(
        node_type: NodeType,
        path: String,
        cur_depth: Depth,
        max_depth: Depth,
    ) -> Self {
        Self {
            node_type,
            path,
            param_path: String::new(),
            params: Params::new(),
            cur_depth,
            max_depth,
            handler: None,
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Canonical parameter segment, empty for non-param nodes.
    #[inline]
    pub fn param_path(&self) -> &str {
        &self.param_path
    }

    #[inline]
    pub fn params(&self) -> &Params {
        &self.params
    }

    #[inline]
    pub fn cur_depth(&self) -> Depth {
        self.cur_depth
    }

    #[inline]
    pub fn max_depth(&self) -> Depth {
        self.max_depth
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.max_depth == UNBOUNDED_DEPTH
    }

    #[inline]
    pub fn handler(&self) -> Option<&H> {
        self.handler.as_ref()
    }

    #[inline]
    pub fn children(&self) -> &[RouteNode<H>] {
        &self.children
    }

    /// A potential match terminus: any non-root node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.node_type != NodeType::Root && !self.has_children()
    }

    #[inline]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn find_child(&self, path: &str) -> Option<&RouteNode<H>> {
        self.children.iter().find(|child| child.path == path)
    }

    pub(crate) fn find_child_mut(&mut self, path: &str) -> Option<&mut RouteNode<H>> {
        self.children.iter_mut().find(|child| child.path == path)
    }
}

impl<H> Default for RouteNode<H> {
    fn default() -> Self {
        Self::root()
    }
}
