use std::collections::BTreeMap;

use serde::Serialize;

use super::{NodeType, RouteNode};
use crate::pattern::RouteOption;
use crate::types::Depth;

/// Serializable view of a node's structural fields. The handler itself is never emitted.
#[derive(Debug, Serialize)]
pub struct NodeDump<'a> {
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub path: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub param_path: &'a str,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<&'a str, &'a RouteOption>,
    pub cur_depth: Depth,
    pub max_depth: Depth,
    pub has_handler: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeDump<'a>>,
}

impl<'a, H> From<&'a RouteNode<H>> for NodeDump<'a> {
    fn from(node: &'a RouteNode<H>) -> Self {
        NodeDump {
            node_type: node.node_type,
            path: &node.path,
            param_path: &node.param_path,
            params: node
                .params
                .iter()
                .map(|(name, option)| (name.as_str(), option))
                .collect(),
            cur_depth: node.cur_depth,
            max_depth: node.max_depth,
            has_handler: node.handler.is_some(),
            children: node.children.iter().map(NodeDump::from).collect(),
        }
    }
}

impl<H> RouteNode<H> {
    pub fn dump(&self) -> NodeDump<'_> {
        NodeDump::from(self)
    }

    pub fn dump_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.dump())
    }

    pub fn dump_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.dump())
    }
}
