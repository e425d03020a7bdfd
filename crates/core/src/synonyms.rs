//! Synonyms module - equivalence classes of tile identifiers
//!
//! Tile variants that should form one region (a grass tile and its flowered
//! twin, say) are declared synonyms. The table keeps each id's canonical
//! representative directly, plus the member list of every class:
//!
//! - **Query** (`canonical_of`, `are_equivalent`): one hash lookup, `&self`
//! - **Merge** (`add_synonym`): the smaller class is relabelled into the larger
//!   one, so each id is relabelled at most `log2(n)` times overall
//!
//! Ids never mentioned are their own class.

use std::collections::HashMap;

use crate::types::TileId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    canonical: HashMap<TileId, TileId>,
    members: HashMap<TileId, Vec<TileId>>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table where each group forms one class
    pub fn from_groups<G, I>(groups: G) -> Self
    where
        G: IntoIterator<Item = I>,
        I: IntoIterator<Item = TileId>,
    {
        let mut table = Self::new();
        for group in groups {
            table.add_group(group);
        }
        table
    }

    /// Representative of `id`'s class (`id` itself if never merged)
    pub fn canonical_of(&self, id: TileId) -> TileId {
        self.canonical.get(&id).copied().unwrap_or(id)
    }

    pub fn are_equivalent(&self, a: TileId, b: TileId) -> bool {
        a == b || self.canonical_of(a) == self.canonical_of(b)
    }

    /// Merge the classes of `a` and `b`.
    ///
    /// The representative of the larger class survives; on a tie, `a`'s does.
    /// Returns false if they were already equivalent.
    pub fn add_synonym(&mut self, a: TileId, b: TileId) -> bool {
        let root_a = self.canonical_of(a);
        let root_b = self.canonical_of(b);
        if root_a == root_b {
            return false;
        }

        let (keep, absorb) = if self.class_len(root_b) > self.class_len(root_a) {
            (root_b, root_a)
        } else {
            (root_a, root_b)
        };

        let moved = self.members.remove(&absorb).unwrap_or_else(|| vec![absorb]);
        for &id in &moved {
            self.canonical.insert(id, keep);
        }
        self.canonical.insert(keep, keep);
        self.members
            .entry(keep)
            .or_insert_with(|| vec![keep])
            .extend(moved);
        true
    }

    /// Merge every id in `group` into one class.
    ///
    /// Equivalent to adding every pairwise combination of the group.
    pub fn add_group(&mut self, group: impl IntoIterator<Item = TileId>) {
        let mut ids = group.into_iter();
        let Some(first) = ids.next() else {
            return;
        };
        for id in ids {
            self.add_synonym(first, id);
        }
    }

    /// Members of `id`'s class, sorted
    pub fn class_of(&self, id: TileId) -> Vec<TileId> {
        let root = self.canonical_of(id);
        let mut members = self
            .members
            .get(&root)
            .cloned()
            .unwrap_or_else(|| vec![root]);
        members.sort_unstable();
        members
    }

    /// Number of ids that belong to a multi-member class
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    fn class_len(&self, root: TileId) -> usize {
        self.members.get(&root).map_or(1, Vec::len)
    }
}
