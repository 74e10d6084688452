use std::sync::Arc;
use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::router::{RouterError, RouterOptions, RouterResult};
use crate::tree::RouteTree;

#[derive(Debug)]
struct RouterState<H> {
    tree: RouteTree<H>,
    readonly: OnceLock<Arc<RouteTree<H>>>,
}

/// Registration front end: a single writer builds the tree, `seal` hands it to readers.
#[derive(Debug)]
pub struct Router<H> {
    inner: RwLock<RouterState<H>>,
}

impl<H> Router<H> {
    pub fn new(options: Option<RouterOptions>) -> Self {
        let state = RouterState {
            tree: RouteTree::new(options.unwrap_or_default()),
            readonly: OnceLock::new(),
        };
        Self {
            inner: RwLock::new(state),
        }
    }

    /// Registers one route. Returns `false` when the pattern has no segments.
    pub fn add(&self, pattern: &str, handler: H) -> RouterResult<bool> {
        let mut guard = self.inner.write();

        if guard.readonly.get().is_some() {
            return Err(RouterError::AddWhileSealed {
                pattern: pattern.to_string(),
            });
        }

        Ok(guard.tree.insert(pattern, handler)?)
    }

    /// Registers routes in order, stopping at the first failure.
    pub fn add_bulk<'p, I>(&self, entries: I) -> RouterResult<usize>
    where
        I: IntoIterator<Item = (&'p str, H)>,
    {
        let mut guard = self.inner.write();

        if guard.readonly.get().is_some() {
            let count = entries.into_iter().count();
            return Err(RouterError::BulkAddWhileSealed { count });
        }

        Ok(guard.tree.insert_bulk(entries)?)
    }

    /// Freezes the tree. Later calls are no-ops.
    pub fn seal(&self) {
        let mut guard = self.inner.write();
        if guard.readonly.get().is_some() {
            return;
        }

        let options = guard.tree.options().clone();
        let tree = std::mem::replace(&mut guard.tree, RouteTree::new(options));
        tracing::debug!(
            routes = tree.route_count() as u64,
            nodes = tree.root().node_count() as u64,
            "router sealed"
        );
        let _ = guard.readonly.set(Arc::new(tree));
    }

    pub fn is_sealed(&self) -> bool {
        self.inner.read().readonly.get().is_some()
    }

    pub fn get_readonly(&self) -> RouterResult<Arc<RouteTree<H>>> {
        let guard = self.inner.read();

        match guard.readonly.get() {
            Some(tree) => Ok(tree.clone()),
            None => Err(RouterError::ReadOnlyUnavailable),
        }
    }

    pub fn route_count(&self) -> usize {
        let guard = self.inner.read();
        match guard.readonly.get() {
            Some(tree) => tree.route_count(),
            None => guard.tree.route_count(),
        }
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new(None)
    }
}
