// Prefix tree over the keyword set. Children are kept in a `BTreeMap`, so
// every traversal visits continuations in character order regardless of the
// order keywords were inserted in.

use crate::KeywordSet;
use std::collections::BTreeMap;
use std::fmt;

/// One character position in the keyword prefix space.
///
/// The node itself does not store its character; that is the key under which
/// its parent holds it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the suffix `keyword` below this node.
    ///
    /// An empty `keyword` marks this node terminal. Inserting the same
    /// keyword twice leaves the tree unchanged.
    pub fn insert(&mut self, keyword: &str) {
        let mut chars = keyword.chars();
        match chars.next() {
            None => self.terminal = true,
            Some(c) => self.children.entry(c).or_default().insert(chars.as_str()),
        }
    }

    /// Whether some inserted keyword ends exactly at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Children in ascending character order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = (char, &TrieNode)> + '_ {
        self.children.iter().map(|(&c, node)| (c, node))
    }

    /// Whether `keyword` was inserted below this node.
    pub fn contains(&self, keyword: &str) -> bool {
        let mut node = self;
        for c in keyword.chars() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.terminal
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(TrieNode::node_count).sum::<usize>()
    }

    /// Number of terminal nodes in this subtree.
    pub fn keyword_count(&self) -> usize {
        usize::from(self.terminal)
            + self
                .children
                .values()
                .map(TrieNode::keyword_count)
                .sum::<usize>()
    }

    fn fmt_subtree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for (c, child) in &self.children {
            write!(f, "{:indent$}{}", "", c, indent = depth * 2)?;
            if child.terminal {
                write!(f, " *")?;
            }
            writeln!(f)?;
            child.fmt_subtree(f, depth + 1)?;
        }
        Ok(())
    }
}

/// The keyword prefix tree.
///
/// Built once, then handed to the [`Emitter`](crate::Emitter) read-only.
///
/// ```rust
/// # use ppkw_gen::Trie;
/// let mut trie = Trie::new();
/// trie.insert("if");
/// trie.insert("ifdef");
/// assert!(trie.contains("if"));
/// assert!(!trie.contains("ifd"));
/// assert_eq!(trie.root().child_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, keyword: &str) {
        self.root.insert(keyword);
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.root.contains(keyword)
    }

    /// Number of nodes, root excluded.
    pub fn node_count(&self) -> usize {
        self.root.node_count() - 1
    }

    pub fn keyword_count(&self) -> usize {
        self.root.keyword_count()
    }
}

impl From<&KeywordSet> for Trie {
    fn from(keywords: &KeywordSet) -> Self {
        let mut trie = Trie::new();
        for keyword in keywords.iter() {
            trie.insert(keyword);
        }
        trie
    }
}

/// Indented dump, one node per line, `*` marking terminal nodes.
impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt_subtree(f, 0)
    }
}
