/*! A sorted map over the AA tree

# About
This sorted map uses the library's [AA tree](crate::hierarchies::aa_tree) as
its backing structure, providing _O(log(n))_ search, insert, and delete
operations plus in-order and range iteration over its entries.

Replacement comes straight from the backing tree: inserting an entry whose
key is already present swaps the entries in place and hands the old one
back, so `put` is last-write-wins without a separate remove pass.

# Example
```rust
    use aa_arena::associative::aa_tree_map::TreeMap;

    let text = "and the final paragraph clearly came from the heart,
    or whatever cool yet sensitive organ Sadie kept in place of one.";

    let mut map = TreeMap::<char, usize>::new();

    for e in text.chars() {
        let count = map.get(&e).copied().unwrap_or(0);
        map.put(e, count + 1);
    }

    // Entries come out in key order
    assert_eq!(map.first(), Some((&'\n', &1)));
    assert_eq!(map.get(&'a'), Some(&12));
    assert_eq!(map.get(&'e'), Some(&14));
    assert_eq!(map.get(&'u'), None);

    // Range iteration from a probe key
    let from_v: Vec<char> = map.range(&'v').map(|(k, _)| *k).collect();
    assert_eq!(from_v, ['v', 'w', 'y']);
```
*/

use crate::hierarchies::aa_tree::{self, AATree};

use std::borrow::Borrow;
use std::cmp::Ordering;

/// The wrapper struct that allows `TreeMap<K, V>` to use `AATree<T>`.
/// All ordering traits compare on `key` alone, so entries with equal keys
/// and different values are "equal" to the tree; that is what turns the
/// tree's swap-on-equal insert into last-write-wins map semantics.
#[derive(Debug)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}
impl<K, V> Entry<K, V> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the entry and returns its parts.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}
impl<K: PartialEq, V> PartialEq for Entry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}
// Eq requires PartialEq
impl<K: Eq, V> Eq for Entry<K, V> {}
// PartialOrd requires PartialEq
impl<K: PartialOrd, V> PartialOrd for Entry<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}
// Ord requires Eq + PartialOrd
impl<K: Ord, V> Ord for Entry<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
// Lets the tree take bare `&K` probes for entry lookups
impl<K, V> Borrow<K> for Entry<K, V> {
    fn borrow(&self) -> &K {
        &self.key
    }
}

/// A sorted map with _O(log(n))_ operations and in-order iteration.
///
/// See the [module-level documentation](crate::associative::aa_tree_map)
/// for more details.
#[derive(Debug)]
pub struct TreeMap<K, V> {
    tree: AATree<Entry<K, V>>,
}
impl<K, V> Default for TreeMap<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
impl<K, V> TreeMap<K, V>
where
    K: Ord,
{
    /// Constructor
    pub fn new() -> Self {
        Self {
            tree: AATree::new(),
        }
    }

    /// Returns the number of entries in the map.
    pub fn size(&self) -> usize {
        self.tree.size()
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns `true` if the map contains an entry for the given key.
    pub fn contains(&self, key: &K) -> bool {
        self.tree.contains(key)
    }

    /// Returns a reference to the value for the given key, if `Some`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.get(key).map(|entry| &entry.value)
    }

    /// Inserts a key:value pair into the map. If the key already exists,
    /// the new entry takes its place and the old entry is returned.
    pub fn put(&mut self, key: K, value: V) -> Option<Entry<K, V>> {
        self.tree.insert(Entry { key, value })
    }

    /// Removes and returns the entry for the given key, if it exists.
    pub fn remove(&mut self, key: &K) -> Option<Entry<K, V>> {
        self.tree.remove(key)
    }

    /// Returns the entry with the smallest key, or `None` on an empty map.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.tree.first().map(|entry| (&entry.key, &entry.value))
    }

    /// Returns the entry with the largest key, or `None` on an empty map.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.tree.last().map(|entry| (&entry.key, &entry.value))
    }

    /// Returns an iterator over borrowed key:value pairs in key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            iter: self.tree.iter(),
        }
    }

    /// Returns an iterator over borrowed key:value pairs starting at the
    /// smallest key greater than or equal to the probe.
    pub fn range(&self, key: &K) -> Iter<'_, K, V> {
        Iter {
            iter: self.tree.range(key),
        }
    }
}

/// Borrowed key:value iterator. See [TreeMap::iter].
pub struct Iter<'a, K, V> {
    iter: aa_tree::Iter<'a, Entry<K, V>>,
}
impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: Ord,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|entry| (&entry.key, &entry.value))
    }
}

// Unit tests
/////////////

#[test]
// Generic type test
fn aa_tree_map_test() {
    let mut map = TreeMap::<&str, u8>::new();

    assert_eq!(map.size(), 0);
    assert!(map.is_empty());

    map.put("Peter", 40);
    assert_eq!(map.size(), 1);

    map.put("Brain", 39);
    map.put("Remus", 22);
    map.put("Bobson", 36);
    map.put("Dingus", 18);
    map.put("Dangus", 27);
    assert_eq!(map.size(), 6);

    assert!(map.contains(&"Dingus"));
    assert_eq!(map.get(&"Remus"), Some(&22));

    // put() on an existing key swaps the entry and returns the old one
    let old = map.put("Peter", 41).unwrap();
    assert_eq!(*old.value(), 40_u8);
    assert_eq!(map.get(&"Peter"), Some(&41));
    assert_eq!(map.size(), 6);

    // remove() hands the entry back
    let removed = map.remove(&"Dangus").unwrap();
    assert_eq!(removed.key(), &"Dangus");
    assert_eq!(*removed.value(), 27);
    assert!(!map.contains(&"Dangus"));
    assert_eq!(map.remove(&"Dangus"), None);
    assert_eq!(map.size(), 5);
}

#[test]
// Tests that the structure is iterable, in key order, with range starts
fn iter_test() {
    let mut map = TreeMap::<usize, char>::new();
    for (index, char) in "acbjfed".chars().enumerate() {
        map.put(index, char); // index is key, char is value
    }

    let keys: Vec<usize> = map.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, [0, 1, 2, 3, 4, 5, 6]);
    let values: Vec<char> = map.iter().map(|(_, v)| *v).collect();
    assert_eq!(values, ['a', 'c', 'b', 'j', 'f', 'e', 'd']);

    assert_eq!(map.first(), Some((&0, &'a')));
    assert_eq!(map.last(), Some((&6, &'d')));

    // Range iteration picks up from the probe key
    let tail: Vec<char> = map.range(&4).map(|(_, v)| *v).collect();
    assert_eq!(tail, ['f', 'e', 'd']);
    assert_eq!(map.range(&7).next(), None);
}

#[test]
// Character frequency count driven through put/get alone
fn word_count_test() {
    let text = "the quick brown fox jumps over the lazy dog";

    let mut map = TreeMap::<char, usize>::new();
    for e in text.chars() {
        let count = map.get(&e).copied().unwrap_or(0);
        map.put(e, count + 1);
    }

    assert_eq!(map.get(&'o'), Some(&4));
    assert_eq!(map.get(&'e'), Some(&3));
    assert_eq!(map.get(&' '), Some(&8));
    assert_eq!(map.get(&'!'), None);

    // Each distinct character appears exactly once in iteration
    let mut total = 0;
    for (_, count) in map.iter() {
        total += count;
    }
    assert_eq!(total, text.chars().count());
}
