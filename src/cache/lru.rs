//! LRU Cache Module
//!
//! Byte-budgeted Least Recently Used cache.
//!
//! Entries live in an arena (`Vec<Node>`) linked into a doubly linked list by
//! index: head = most recently used, tail = least recently used. A `HashMap`
//! maps each key to its arena slot, so lookups, promotions and evictions are
//! all O(1). Vacated slots go on a free list and are reused by later inserts.

use std::collections::HashMap;
use std::fmt;
use std::iter::FusedIterator;

use crate::cache::ByteSize;

/// Null link in the recency list.
const NIL: usize = usize::MAX;

/// Callback invoked with every entry evicted for capacity reasons.
pub type EvictionHook<V> = Box<dyn FnMut(&str, &V) + Send>;

// == Node ==
/// Arena slot. A vacant slot has an empty key and no value.
#[derive(Debug)]
struct Node<V> {
    key: String,
    value: Option<V>,
    /// Bytes charged to `used_bytes` for this entry
    size: usize,
    prev: usize,
    next: usize,
}

// == LRU Cache ==
/// Size-aware LRU cache mapping string keys to values that report their size.
///
/// Every entry costs `key.len() + value.byte_size()` bytes, measured when it
/// is inserted and released at that same amount. Whenever an insert
/// pushes the total over `capacity_bytes`, least recently used entries are
/// evicted until the total fits again. A capacity of `0` disables eviction.
///
/// An entry larger than the whole budget is not special-cased: eviction keeps
/// going until the cache is empty, the new entry included.
///
/// The cache does no locking. Callers sharing it across threads must
/// serialize access themselves.
pub struct LruCache<V> {
    /// Maximum aggregate size in bytes, 0 = unbounded
    capacity_bytes: usize,
    /// Sum of `key.len() + value.byte_size()` over live entries
    used_bytes: usize,
    /// Key -> arena slot
    index: HashMap<String, usize>,
    /// Entry arena
    nodes: Vec<Node<V>>,
    /// Vacated slots available for reuse
    free: Vec<usize>,
    /// Most recently used slot
    head: usize,
    /// Least recently used slot
    tail: usize,
    /// Optional eviction callback
    on_evicted: Option<EvictionHook<V>>,
}

impl<V> fmt::Debug for LruCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity_bytes", &self.capacity_bytes)
            .field("used_bytes", &self.used_bytes)
            .field("len", &self.index.len())
            .field("has_eviction_hook", &self.on_evicted.is_some())
            .finish()
    }
}

impl<V: ByteSize> LruCache<V> {
    // == Constructors ==
    /// Creates an empty cache with the given byte budget and no eviction hook.
    pub fn new(capacity_bytes: usize) -> Self {
        Self {
            capacity_bytes,
            used_bytes: 0,
            index: HashMap::new(),
            nodes: Vec::new(),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            on_evicted: None,
        }
    }

    /// Creates an empty cache that calls `hook` for every evicted entry.
    ///
    /// The hook runs after the entry has been unlinked and its bytes released.
    pub fn with_eviction_hook<F>(capacity_bytes: usize, hook: F) -> Self
    where
        F: FnMut(&str, &V) + Send + 'static,
    {
        let mut cache = Self::new(capacity_bytes);
        cache.on_evicted = Some(Box::new(hook));
        cache
    }

    // == Get ==
    /// Looks up `key`, marking it as most recently used on a hit.
    ///
    /// Never changes the byte total and never evicts.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.move_to_front(idx);
        self.nodes[idx].value.as_ref()
    }

    // == Insert ==
    /// Inserts or replaces the value for `key` and marks it most recently used.
    ///
    /// Afterwards evicts from the least recently used end while the byte total
    /// exceeds the budget.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        let new_size = value.byte_size();

        if let Some(&idx) = self.index.get(&key) {
            self.move_to_front(idx);
            let node = &mut self.nodes[idx];
            let old_size = node.size;
            node.size = key.len() + new_size;
            node.value = Some(value);
            self.used_bytes = self.used_bytes - old_size + node.size;
        } else {
            let size = key.len() + new_size;
            self.used_bytes += size;
            let idx = self.alloc(key.clone(), value, size);
            self.push_front(idx);
            self.index.insert(key, idx);
        }

        while self.capacity_bytes != 0 && self.used_bytes > self.capacity_bytes {
            if self.remove_oldest().is_none() {
                break;
            }
        }
    }

    // == Remove Oldest ==
    /// Evicts the least recently used entry and returns it.
    ///
    /// Returns None (and does nothing) if the cache is empty. The eviction hook,
    /// if any, sees the entry before it is handed back.
    pub fn remove_oldest(&mut self) -> Option<(String, V)> {
        if self.tail == NIL {
            return None;
        }

        let idx = self.tail;
        self.unlink(idx);

        let node = &mut self.nodes[idx];
        let key = std::mem::take(&mut node.key);
        let value = node.value.take();
        self.used_bytes -= std::mem::take(&mut node.size);
        self.index.remove(&key);
        self.free.push(idx);

        let value = value?;
        if let Some(hook) = self.on_evicted.as_mut() {
            hook(&key, &value);
        }
        Some((key, value))
    }

    // == Accessors ==
    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Bytes currently accounted to live entries.
    pub fn used_bytes(&self) -> usize {
        self.used_bytes
    }

    /// Configured byte budget, 0 = unbounded.
    pub fn capacity_bytes(&self) -> usize {
        self.capacity_bytes
    }

    /// Checks for `key` without touching its recency.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterates entries from most to least recently used without touching recency.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            nodes: &self.nodes,
            current: self.head,
            remaining: self.index.len(),
        }
    }

    // == List Internals ==
    fn alloc(&mut self, key: String, value: V, size: usize) -> usize {
        let node = Node {
            key,
            value: Some(value),
            size,
            prev: NIL,
            next: NIL,
        };
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);

        if prev == NIL {
            self.head = next;
        } else {
            self.nodes[prev].next = next;
        }

        if next == NIL {
            self.tail = prev;
        } else {
            self.nodes[next].prev = prev;
        }

        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = NIL;
    }

    fn push_front(&mut self, idx: usize) {
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = self.head;

        if self.head == NIL {
            self.tail = idx;
        } else {
            self.nodes[self.head].prev = idx;
        }
        self.head = idx;
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head != idx {
            self.unlink(idx);
            self.push_front(idx);
        }
    }
}

// == Iterator ==
/// Most-to-least recently used iterator, see [`LruCache::iter`].
pub struct Iter<'a, V> {
    nodes: &'a [Node<V>],
    current: usize,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == NIL {
            return None;
        }
        let node = &self.nodes[self.current];
        self.current = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        node.value.as_ref().map(|value| (node.key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

// `current` stays NIL once the tail has been passed
impl<V> FusedIterator for Iter<'_, V> {}
