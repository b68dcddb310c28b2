//! Transposition table.
//!
//! A fixed-bucket open-chaining map from position hash to search results,
//! used for move-ordering hints. The table grows per search and is wiped by
//! [`TranspositionTable::update`] once it holds more than ten entries per
//! bucket.

use crate::board::Move;

/// How a stored entry should be interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryFlag {
    /// Freshly inserted or invalidated; carries no information.
    Ignore,
    /// `best_move` was the best move found at `depth`.
    BestMove,
    /// `best_move` raised alpha but the search did not complete.
    GoodMove,
}

#[derive(Clone, Debug)]
pub struct TableEntry {
    pub hash: u64,
    pub depth: i32,
    pub best_move: Move,
    pub flag: EntryFlag,
}

const DEFAULT_BUCKETS: usize = 32768;

pub struct TranspositionTable {
    buckets: Vec<Vec<TableEntry>>,
    entries: usize,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    #[must_use]
    pub fn with_buckets(buckets: usize) -> Self {
        TranspositionTable {
            buckets: vec![Vec::new(); buckets],
            entries: 0,
        }
    }

    #[inline]
    fn bucket_index(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }

    /// Find the entry for `hash`, inserting an `Ignore` placeholder on a
    /// miss.
    pub fn get_entry(&mut self, hash: u64) -> &mut TableEntry {
        let index = self.bucket_index(hash);

        match self.buckets[index]
            .iter()
            .position(|entry| entry.hash == hash)
        {
            Some(pos) => &mut self.buckets[index][pos],
            None => {
                self.buckets[index].push(TableEntry {
                    hash,
                    depth: 0,
                    best_move: Move::NULL,
                    flag: EntryFlag::Ignore,
                });
                self.entries += 1;
                let last = self.buckets[index].len() - 1;
                &mut self.buckets[index][last]
            }
        }
    }

    /// Look up `hash` without inserting.
    #[must_use]
    pub fn probe(&self, hash: u64) -> Option<&TableEntry> {
        self.buckets[self.bucket_index(hash)]
            .iter()
            .find(|entry| entry.hash == hash)
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.entries = 0;
    }

    /// Wipe the table once it has outgrown ten entries per bucket. Called
    /// between engine moves.
    pub fn update(&mut self) {
        if self.entries > self.buckets.len() * 10 {
            self.clear();
        }
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        TranspositionTable::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, Square};

    #[test]
    fn test_get_entry_inserts_placeholder() {
        let mut tt = TranspositionTable::with_buckets(16);
        let entry = tt.get_entry(0x1234);
        assert_eq!(entry.flag, EntryFlag::Ignore);
        assert!(entry.best_move.is_null());
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn test_get_entry_finds_existing() {
        let mut tt = TranspositionTable::with_buckets(16);
        let m = Move::encode(
            Square::E2,
            Square::E4,
            Piece::Pawn,
            Piece::Pawn,
            crate::board::NO_FLAGS,
        );
        {
            let entry = tt.get_entry(0x1234);
            entry.depth = 6;
            entry.best_move = m;
            entry.flag = EntryFlag::BestMove;
        }
        let entry = tt.get_entry(0x1234);
        assert_eq!(entry.depth, 6);
        assert_eq!(entry.best_move, m);
        assert_eq!(entry.flag, EntryFlag::BestMove);
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn test_chaining_keeps_colliding_hashes() {
        let mut tt = TranspositionTable::with_buckets(1);
        tt.get_entry(1).depth = 1;
        tt.get_entry(2).depth = 2;
        assert_eq!(tt.len(), 2);
        assert_eq!(tt.probe(1).map(|e| e.depth), Some(1));
        assert_eq!(tt.probe(2).map(|e| e.depth), Some(2));
    }

    #[test]
    fn test_update_clears_overgrown_table() {
        let mut tt = TranspositionTable::with_buckets(2);
        for hash in 0..=20 {
            tt.get_entry(hash);
        }
        assert!(tt.len() > 20);
        tt.update();
        assert!(tt.is_empty());
        assert!(tt.probe(3).is_none());
    }

    #[test]
    fn test_update_keeps_small_table() {
        let mut tt = TranspositionTable::with_buckets(4);
        for hash in 0..10 {
            tt.get_entry(hash);
        }
        tt.update();
        assert_eq!(tt.len(), 10);
    }
}
