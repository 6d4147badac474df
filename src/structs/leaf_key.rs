use std::fmt;

/// Canonical leaf value plus its position in the kind's declared vocabulary.
/// Ordering follows the declared position, so `Critical` sorts before `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LeafKey {
    pub rank: usize,
    pub name: &'static str,
}

impl LeafKey {
    pub fn new(rank: usize, name: &'static str) -> Self {
        Self { rank, name }
    }
}

impl fmt::Display for LeafKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
