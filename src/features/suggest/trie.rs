//! Prefix tree over the alias vocabulary.
//!
//! Built once when the suggestion engine is constructed and only read
//! afterwards, so a shared reference can be traversed from any number of
//! threads without locking.

use std::collections::BTreeMap;

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    is_end_of_word: bool,
}

#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Inserts `word` lowercased. Inserting an existing word is a no-op.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.to_lowercase().chars() {
            node = node.children.entry(ch).or_default();
        }
        if !node.is_end_of_word {
            node.is_end_of_word = true;
            self.word_count += 1;
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find_node(&word.to_lowercase())
            .is_some_and(|node| node.is_end_of_word)
    }

    /// All stored words beginning with `prefix`, in lexicographic order.
    ///
    /// Returns an empty vector as soon as one character of the prefix has no
    /// matching edge. An empty prefix yields every word.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        let Some(start) = self.find_node(&prefix) else {
            return Vec::new();
        };

        let mut words = Vec::new();
        let mut buffer = prefix;
        collect_words(start, &mut buffer, &mut words);
        words
    }

    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    fn find_node(&self, key: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in key.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}

// Recursion depth is bounded by the longest alias.
fn collect_words(node: &TrieNode, buffer: &mut String, words: &mut Vec<String>) {
    if node.is_end_of_word {
        words.push(buffer.clone());
    }
    for (ch, child) in &node.children {
        buffer.push(*ch);
        collect_words(child, buffer, words);
        buffer.pop();
    }
}
