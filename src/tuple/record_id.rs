//! Stable addresses for tuples: a page handle plus a slot index.
//!
//! A `RecordId` is held by indexes, dirty-page tracking, and transaction
//! logs as a cross-reference back to the data. Both types are plain `Copy`
//! values with structural equality and hashing, suitable as map keys.

use std::fmt;

/// Handle for one page of a relation's backing file.
///
/// The page layer owns the file format; this layer only needs the handle to
/// be cheap to copy, compare, and hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId {
    table_id: u32,
    page_no: u32,
}

impl PageId {
    pub fn new(table_id: u32, page_no: u32) -> Self {
        Self { table_id, page_no }
    }

    pub fn table_id(&self) -> u32 {
        self.table_id
    }

    pub fn page_no(&self) -> u32 {
        self.page_no
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.table_id, self.page_no)
    }
}

/// Address of one logical tuple: the page it lives on and its slot there.
///
/// Addresses built from the same (page, slot) pair compare and hash
/// identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId {
    page: PageId,
    slot: u32,
}

impl RecordId {
    pub fn new(page: PageId, slot: u32) -> Self {
        Self { page, slot }
    }

    pub fn page_id(&self) -> PageId {
        self.page
    }

    pub fn slot(&self) -> u32 {
        self.slot
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.page, self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equal_addresses_compare_and_hash_identically() {
        let a = RecordId::new(PageId::new(1, 7), 3);
        let b = RecordId::new(PageId::new(1, 7), 3);

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn differing_slot_or_page_yields_inequality() {
        let base = RecordId::new(PageId::new(1, 7), 3);
        let other_slot = RecordId::new(PageId::new(1, 7), 4);
        let other_page = RecordId::new(PageId::new(1, 8), 3);
        let other_table = RecordId::new(PageId::new(2, 7), 3);

        assert_ne!(base, other_slot);
        assert_ne!(base, other_page);
        assert_ne!(base, other_table);
        assert_ne!(hash_of(&base), hash_of(&other_slot));
        assert_ne!(hash_of(&base), hash_of(&other_page));
    }

    #[test]
    fn usable_as_map_key() {
        let mut dirty: std::collections::HashMap<RecordId, bool> = Default::default();
        let rid = RecordId::new(PageId::new(0, 0), 0);
        dirty.insert(rid, true);
        assert_eq!(dirty.get(&RecordId::new(PageId::new(0, 0), 0)), Some(&true));
    }

    #[test]
    fn display_format() {
        let rid = RecordId::new(PageId::new(2, 5), 9);
        assert_eq!(rid.to_string(), "2:5#9");
    }
}
