/*! # About
The purpose of this crate is a small, focused ordered-container library built
around an arena-backed AA tree. AA trees (Andersson, 1993) balance a binary
search tree with per-node level numbers and just two rebalancing primitives,
which keeps deletion short enough to audit by hand while still guaranteeing
_O(log(n))_ search, insert, and delete.

# Hierarchies
The core structure. Flat, `Vec`-backed storage with index links, no parent
pointers, and no per-node heap allocation.

- [AA tree](crate::hierarchies::aa_tree): The balanced search tree itself.
Elements move in and out by value; equal-key inserts swap in place and hand
the displaced element back; removal from either end or by key returns the
exact element that was stored. Lower-bound positioning plus successor and
predecessor stepping (by root re-descent) give ordered and range iteration.

# Associative
Structures built on the core tree.

- [Sorted map](crate::associative::aa_tree_map): A `TreeMap<K, V>` facade
over the tree using an `Entry<K, V>` that orders on keys alone, which turns
the tree's swap-on-equal insert into last-write-wins map semantics.
*/

pub mod hierarchies {
    pub mod aa_tree;
}
pub mod associative {
    pub mod aa_tree_map;
}
