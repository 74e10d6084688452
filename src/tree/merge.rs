use super::{RouteNode, TreeError, TreeResult};

impl<H> RouteNode<H> {
    /// Folds a compiled chain (or a subtree of one) into this node's children.
    ///
    /// A candidate with no sibling of the same path is adopted whole. Otherwise
    /// its depth is folded into the existing sibling and either its handler is
    /// bound there (leaf candidate) or its children are merged recursively.
    ///
    /// Nothing is rolled back on failure: siblings appended and depths raised
    /// before the conflicting node stay in place.
    pub fn merge(&mut self, candidate: Option<RouteNode<H>>) -> TreeResult<()> {
        let candidate = candidate.ok_or(TreeError::MissingCandidate)?;
        self.merge_node(candidate)
    }

    fn merge_node(&mut self, candidate: RouteNode<H>) -> TreeResult<()> {
        tracing::event!(
            tracing::Level::TRACE,
            operation = "merge",
            path = %candidate.path,
            depth = candidate.cur_depth as u64
        );

        let Some(existing) = self.find_child_mut(&candidate.path) else {
            self.children.push(candidate);
            return Ok(());
        };

        if candidate.max_depth > existing.max_depth {
            existing.max_depth = candidate.max_depth;
        }

        if candidate.is_leaf() {
            if existing.handler.is_some() {
                tracing::warn!(
                    path = %existing.path,
                    depth = existing.cur_depth as u64,
                    "duplicate handler binding"
                );
                return Err(TreeError::DuplicateRoute {
                    path: existing.path.clone(),
                    depth: existing.cur_depth,
                });
            }
            existing.handler = candidate.handler;
            return Ok(());
        }

        for child in candidate.children {
            existing.merge_node(child)?;
        }
        Ok(())
    }
}
