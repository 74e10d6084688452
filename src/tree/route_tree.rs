use super::{NodeDump, RouteNode, TreeResult, compile_route};
use crate::router::RouterOptions;

/// Shared tree built from every registered route chain.
#[derive(Debug, Clone)]
pub struct RouteTree<H> {
    pub(crate) root: RouteNode<H>,
    pub(crate) options: RouterOptions,
    pub(crate) route_count: usize,
}

impl<H> RouteTree<H> {
    pub fn new(options: RouterOptions) -> Self {
        Self {
            root: RouteNode::root(),
            options,
            route_count: 0,
        }
    }

    /// Compiles `pattern` and merges the resulting chain under the root.
    ///
    /// Returns `false` when the pattern has no segments and nothing was registered.
    pub fn insert(&mut self, pattern: &str, handler: H) -> TreeResult<bool> {
        tracing::event!(tracing::Level::TRACE, operation = "insert", pattern = %pattern);

        let Some(chain) = compile_route(pattern, handler, &self.options)? else {
            tracing::debug!(pattern = %pattern, "route pattern has no segments; nothing registered");
            return Ok(false);
        };
        self.root.merge(Some(chain))?;
        self.route_count += 1;

        tracing::debug!(pattern = %pattern, routes = self.route_count as u64, "route registered");
        Ok(true)
    }

    pub fn insert_bulk<'p, I>(&mut self, entries: I) -> TreeResult<usize>
    where
        I: IntoIterator<Item = (&'p str, H)>,
    {
        let mut registered = 0usize;
        for (pattern, handler) in entries {
            if self.insert(pattern, handler)? {
                registered += 1;
            }
        }
        Ok(registered)
    }

    #[inline]
    pub fn root(&self) -> &RouteNode<H> {
        &self.root
    }

    #[inline]
    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    #[inline]
    pub fn route_count(&self) -> usize {
        self.route_count
    }

    pub fn is_empty(&self) -> bool {
        !self.root.has_children()
    }

    /// Looks up the node reached by a pattern's raw segments, without matching semantics.
    pub fn node_at(&self, pattern: &str) -> Option<&RouteNode<H>> {
        let body = pattern.strip_prefix('/').unwrap_or(pattern);
        let body = body.strip_suffix('/').unwrap_or(body);
        if body.is_empty() {
            return Some(&self.root);
        }
        self.root.descend(body.split('/'))
    }

    pub fn dump(&self) -> NodeDump<'_> {
        self.root.dump()
    }

    pub fn dump_json(&self) -> serde_json::Result<String> {
        self.root.dump_json()
    }

    pub fn dump_json_pretty(&self) -> serde_json::Result<String> {
        self.root.dump_json_pretty()
    }
}

impl<H> Default for RouteTree<H> {
    fn default() -> Self {
        Self::new(RouterOptions::default())
    }
}
