//! Order List Module
//!
//! Doubly linked list whose nodes live in a slot arena and are linked by
//! index, giving stable handles and O(1) push, remove and move-to-back.
//!
//! ```text
//!   slots: [ Some{a, prev: None, next: 2}, None, Some{c, prev: 0, next: None} ]
//!   free:  [1]
//!
//!   head ─► [0] ◄──► [2] ◄── tail
//! ```

/// Stable handle to a node in an [`OrderList`].
pub type SlotId = usize;

#[derive(Debug)]
struct Node<K> {
    key: K,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

// == Order List ==
/// Arena-backed doubly linked list.
///
/// - Front = oldest
/// - Back = newest
#[derive(Debug)]
pub struct OrderList<K> {
    slots: Vec<Option<Node<K>>>,
    free: Vec<SlotId>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
    len: usize,
}

impl<K> Default for OrderList<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> OrderList<K> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the oldest key.
    pub fn front(&self) -> Option<&K> {
        self.head.and_then(|id| self.get(id))
    }

    /// Returns the newest key.
    pub fn back(&self) -> Option<&K> {
        self.tail.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: SlotId) -> Option<&K> {
        self.node(id).map(|node| &node.key)
    }

    // == Push Back ==
    /// Appends a key as the newest element and returns its handle.
    pub fn push_back(&mut self, key: K) -> SlotId {
        let node = Node {
            key,
            prev: self.tail,
            next: None,
        };
        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        match self.tail {
            Some(tail) => {
                if let Some(prev) = self.node_mut(tail) {
                    prev.next = Some(id);
                }
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
        id
    }

    // == Remove ==
    /// Unlinks a node, frees its slot and returns its key.
    ///
    /// Returns None for a stale or unknown handle.
    pub fn remove(&mut self, id: SlotId) -> Option<K> {
        self.node(id)?;
        self.detach(id);
        let node = self.slots.get_mut(id)?.take()?;
        self.free.push(id);
        self.len -= 1;
        Some(node.key)
    }

    // == Move To Back ==
    /// Marks a node as the newest element without reallocating its slot.
    pub fn move_to_back(&mut self, id: SlotId) -> bool {
        if self.node(id).is_none() {
            return false;
        }
        if self.tail == Some(id) {
            return true;
        }
        self.detach(id);

        let old_tail = self.tail;
        if let Some(node) = self.node_mut(id) {
            node.prev = old_tail;
            node.next = None;
        }
        match old_tail {
            Some(tail) => {
                if let Some(prev) = self.node_mut(tail) {
                    prev.next = Some(id);
                }
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        true
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates keys from oldest to newest.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    fn node(&self, id: SlotId) -> Option<&Node<K>> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: SlotId) -> Option<&mut Node<K>> {
        self.slots.get_mut(id).and_then(Option::as_mut)
    }

    // Unlinks without freeing; the node keeps stale prev/next until relinked.
    fn detach(&mut self, id: SlotId) {
        let (prev, next) = match self.node(id) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(p) => {
                if let Some(node) = self.node_mut(p) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(node) = self.node_mut(n) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }
}

/// Iterator over an [`OrderList`], oldest first.
pub struct Iter<'a, K> {
    list: &'a OrderList<K>,
    cursor: Option<SlotId>,
    remaining: usize,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.list.node(id)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &OrderList<&'static str>) -> Vec<&'static str> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_list_new() {
        let list: OrderList<&str> = OrderList::new();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn test_list_push_back_order() {
        let mut list = OrderList::new();
        list.push_back("a");
        list.push_back("b");
        list.push_back("c");

        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&"a"));
        assert_eq!(list.back(), Some(&"c"));
        assert_eq!(keys(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_list_remove_middle() {
        let mut list = OrderList::new();
        list.push_back("a");
        let b = list.push_back("b");
        list.push_back("c");

        assert_eq!(list.remove(b), Some("b"));
        assert_eq!(keys(&list), vec!["a", "c"]);
        assert_eq!(list.remove(b), None, "stale handle");
    }

    #[test]
    fn test_list_remove_ends() {
        let mut list = OrderList::new();
        let a = list.push_back("a");
        list.push_back("b");
        let c = list.push_back("c");

        list.remove(a);
        list.remove(c);
        assert_eq!(keys(&list), vec!["b"]);
        assert_eq!(list.front(), Some(&"b"));
        assert_eq!(list.back(), Some(&"b"));
    }

    #[test]
    fn test_list_move_to_back() {
        let mut list = OrderList::new();
        let a = list.push_back("a");
        list.push_back("b");
        list.push_back("c");

        assert!(list.move_to_back(a));
        assert_eq!(keys(&list), vec!["b", "c", "a"]);

        // Already newest
        assert!(list.move_to_back(a));
        assert_eq!(keys(&list), vec!["b", "c", "a"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_list_move_single_element() {
        let mut list = OrderList::new();
        let a = list.push_back("a");
        assert!(list.move_to_back(a));
        assert_eq!(list.front(), Some(&"a"));
        assert_eq!(list.back(), Some(&"a"));
    }

    #[test]
    fn test_list_slot_reuse() {
        let mut list = OrderList::new();
        let a = list.push_back("a");
        list.push_back("b");
        list.remove(a);

        let c = list.push_back("c");
        assert_eq!(c, a, "freed slot is reused");
        assert_eq!(keys(&list), vec!["b", "c"]);
    }

    #[test]
    fn test_list_move_unknown_handle() {
        let mut list: OrderList<u8> = OrderList::new();
        assert!(!list.move_to_back(7));
    }

    #[test]
    fn test_list_clear() {
        let mut list = OrderList::new();
        list.push_back("a");
        list.push_back("b");
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
    }
}
