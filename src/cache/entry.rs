//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and their ordering
//! metadata.

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
///
/// Sequence values come from the owning store's logical clock, so they are
/// comparable across entries of the same store only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Clock value when the key was first inserted
    pub inserted_seq: u64,
    /// Clock value of the latest get or overwrite
    pub last_access: u64,
    /// Number of accesses, including the insert
    pub access_count: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry inserted at `seq`.
    pub fn new(value: V, seq: u64) -> Self {
        Self {
            value,
            inserted_seq: seq,
            last_access: seq,
            access_count: 1,
        }
    }

    // == Touch ==
    /// Records an access at `seq`.
    pub fn touch(&mut self, seq: u64) {
        self.last_access = seq;
        self.access_count = self.access_count.saturating_add(1);
    }

    // == Replace ==
    /// Overwrites the value; counts as an access but keeps the insertion
    /// sequence. Returns the previous value.
    pub fn replace(&mut self, value: V, seq: u64) -> V {
        self.touch(seq);
        std::mem::replace(&mut self.value, value)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value", 7);

        assert_eq!(entry.value, "test_value");
        assert_eq!(entry.inserted_seq, 7);
        assert_eq!(entry.last_access, 7);
        assert_eq!(entry.access_count, 1);
    }

    #[test]
    fn test_entry_touch() {
        let mut entry = CacheEntry::new(1u32, 1);
        entry.touch(5);
        entry.touch(9);

        assert_eq!(entry.last_access, 9);
        assert_eq!(entry.access_count, 3);
        assert_eq!(entry.inserted_seq, 1);
    }

    #[test]
    fn test_entry_replace_keeps_insertion_seq() {
        let mut entry = CacheEntry::new("old".to_string(), 2);
        let previous = entry.replace("new".to_string(), 4);

        assert_eq!(previous, "old");
        assert_eq!(entry.value, "new");
        assert_eq!(entry.inserted_seq, 2);
        assert_eq!(entry.last_access, 4);
        assert_eq!(entry.access_count, 2);
    }
}
