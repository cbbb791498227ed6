//! Spelling index for the Lakota spell checker.
//!
//! A multiway trie over Unicode codepoints. Every node that terminates at
//! least one indexed spelling carries the list of owners (dictionary entry
//! identities) that produced it, in insertion order and without duplicates.
//!
//! Nodes live in a single arena and are addressed by index. Child links are
//! kept in one `hashbrown` table keyed by `(parent, codepoint)`, so a lookup
//! costs one hash probe per codepoint regardless of how many letters can
//! follow at that depth. Nothing is ever removed.

use hashbrown::HashMap;
use lakota_core::{LkError, Result};

/// Index of a node in the trie arena.
type NodeId = u32;

const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
struct Node<T> {
    /// Entries whose spelling ends at this node.
    owners: Vec<T>,
}

impl<T> Node<T> {
    fn new() -> Self {
        Self { owners: Vec::new() }
    }
}

/// Trie mapping spellings to their owners.
///
/// `T` is an owner handle compared by identity (`PartialEq`), typically a
/// small `Copy` index into the dictionary's entry arena.
#[derive(Debug, Clone)]
pub struct Trie<T> {
    nodes: Vec<Node<T>>,
    edges: HashMap<(NodeId, char), NodeId>,
    /// Number of nodes with at least one owner.
    terminals: usize,
}

impl<T: Copy + PartialEq> Trie<T> {
    /// Create an empty trie containing only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            edges: HashMap::new(),
            terminals: 0,
        }
    }

    /// Index `path` for `owner`.
    ///
    /// Walks one node per codepoint, creating nodes as needed, and appends
    /// `owner` to the terminal node unless it is already listed there.
    /// Returns `true` when the owner was appended, `false` when the pair was
    /// already present or `path` is empty (both are successful no-ops).
    pub fn insert(&mut self, path: &str, owner: T) -> Result<bool> {
        if path.is_empty() {
            return Ok(false);
        }

        let mut node = ROOT;
        for c in path.chars() {
            node = match self.edges.get(&(node, c)) {
                Some(&child) => child,
                None => self.add_child(node, c)?,
            };
        }

        let terminal = &mut self.nodes[node as usize];
        if terminal.owners.contains(&owner) {
            return Ok(false);
        }
        terminal.owners.try_reserve(1)?;
        if terminal.owners.is_empty() {
            self.terminals += 1;
        }
        terminal.owners.push(owner);
        Ok(true)
    }

    /// Owners of `path`, in insertion order.
    ///
    /// Returns `None` for the empty path, when a codepoint along the path has
    /// no matching child, or when the path is only a prefix of indexed
    /// spellings.
    pub fn search(&self, path: &str) -> Option<&[T]> {
        if path.is_empty() {
            return None;
        }
        let mut node = ROOT;
        for c in path.chars() {
            node = *self.edges.get(&(node, c))?;
        }
        let owners = &self.nodes[node as usize].owners;
        if owners.is_empty() {
            None
        } else {
            Some(owners)
        }
    }

    /// Whether `path` is a complete indexed spelling.
    pub fn contains(&self, path: &str) -> bool {
        self.search(path).is_some()
    }

    /// Number of distinct indexed spellings.
    pub fn len(&self) -> usize {
        self.terminals
    }

    pub fn is_empty(&self) -> bool {
        self.terminals == 0
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn add_child(&mut self, parent: NodeId, c: char) -> Result<NodeId> {
        let id = NodeId::try_from(self.nodes.len())
            .map_err(|_| LkError::OutOfMemory("numbering trie nodes"))?;
        self.nodes.try_reserve(1)?;
        self.edges
            .try_reserve(1)
            .map_err(|_| LkError::OutOfMemory("growing the trie edge table"))?;
        self.nodes.push(Node::new());
        self.edges.insert((parent, c), id);
        Ok(id)
    }
}

impl<T: Copy + PartialEq> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}
