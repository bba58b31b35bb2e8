//! Visit counts per position key, used to detect threefold repetition.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepetitionTable {
    visits: HashMap<u64, u8>,
}

impl RepetitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visit and return the position's updated count.
    pub fn add_visit(&mut self, key: u64) -> u8 {
        let count = self.visits.entry(key).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Forget one visit of `key`.
    ///
    /// # Panics
    /// Panics if `key` has no recorded visits; removals must mirror additions.
    pub fn remove_visit(&mut self, key: u64) {
        match self.visits.entry(key) {
            Entry::Occupied(mut entry) if *entry.get() > 1 => *entry.get_mut() -= 1,
            Entry::Occupied(entry) => {
                entry.remove();
            }
            Entry::Vacant(_) => panic!("removed a visit of position {key:#018x} that was never recorded"),
        }
    }

    #[inline]
    pub fn visit_count(&self, key: u64) -> u8 {
        self.visits.get(&key).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::RepetitionTable;

    #[test]
    fn counts_rise_and_fall_with_visits() {
        let mut table = RepetitionTable::new();
        assert_eq!(table.add_visit(7), 1);
        assert_eq!(table.add_visit(7), 2);
        assert_eq!(table.add_visit(9), 1);
        table.remove_visit(7);
        assert_eq!(table.visit_count(7), 1);
        table.remove_visit(7);
        assert_eq!(table.visit_count(7), 0);
        assert_eq!(table.visit_count(9), 1);
    }

    #[test]
    #[should_panic(expected = "never recorded")]
    fn removing_unvisited_position_panics() {
        let mut table = RepetitionTable::new();
        table.remove_visit(42);
    }
}
