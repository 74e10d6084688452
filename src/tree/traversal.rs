use super::RouteNode;

const TRAVERSAL_STACK_CAPACITY: usize = 64;

impl<H> RouteNode<H> {
    /// Depth-first pre-order walk over this node and its descendants.
    /// Children are visited in insertion order. Uses an explicit stack.
    pub fn walk<'a, F>(&'a self, mut action: F)
    where
        F: FnMut(&'a RouteNode<H>),
    {
        let mut stack: Vec<&'a RouteNode<H>> = Vec::with_capacity(TRAVERSAL_STACK_CAPACITY);
        stack.push(self);

        while let Some(node) = stack.pop() {
            action(node);
            stack.extend(node.children.iter().rev());
        }
    }

    /// Follows raw segment paths child by child.
    pub fn descend<'s, I>(&self, segments: I) -> Option<&RouteNode<H>>
    where
        I: IntoIterator<Item = &'s str>,
    {
        segments
            .into_iter()
            .try_fold(self, |node, segment| node.find_child(segment))
    }

    pub fn node_count(&self) -> usize {
        let mut count = 0usize;
        self.walk(|_| count += 1);
        count
    }
}
