/// Identity of a node within one parsed [`Document`](crate::ast::Document).
///
/// Ids are assigned sequentially by the parser, so two structurally
/// identical nodes at different places in a document have different ids.
/// They are the keys of every memo table in
/// [`ValidationContext`](crate::validation::ValidationContext).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Serialize)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw index of this id.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out fresh [`NodeId`]s while a document is being built.
#[derive(Debug, Default)]
pub(crate) struct NodeIdAllocator {
    next: u32,
}

impl NodeIdAllocator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    pub(crate) fn allocated(&self) -> u32 {
        self.next
    }
}
