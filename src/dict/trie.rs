use std::collections::HashMap;

#[derive(Debug, Default)]
struct TrieNode {
    final_state: bool,
    child_nodes: HashMap<char, TrieNode>,
}

impl TrieNode {
    fn find<C: Iterator<Item = char>>(&self, chars: C) -> Option<&TrieNode> {
        let mut current_node = self;
        for c in chars {
            current_node = current_node.child_nodes.get(&c)?;
        }
        Some(current_node)
    }

    fn find_mut<C: Iterator<Item = char>>(&mut self, chars: C) -> Option<&mut TrieNode> {
        let mut current_node = self;
        for c in chars {
            current_node = current_node.child_nodes.get_mut(&c)?;
        }
        Some(current_node)
    }

    // 插入词条，返回是否为新词
    fn insert<C: Iterator<Item = char>>(&mut self, chars: C) -> bool {
        let mut current_node = self;
        for c in chars {
            current_node = current_node
                .child_nodes
                .entry(c)
                .or_default();
        }
        !std::mem::replace(&mut current_node.final_state, true)
    }
}

/// Char keyed prefix tree holding the word set.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    size: usize,
}

impl Trie {
    /// Inserts a word, returning `false` when it was already present.
    /// The empty word is ignored.
    pub fn insert<C: Iterator<Item = char>>(&mut self, chars: C) -> bool {
        let mut chars = chars.peekable();
        if chars.peek().is_none() {
            return false;
        }
        let added = self.root.insert(chars);
        if added {
            self.size += 1;
        }
        added
    }

    /// Unmarks a word. Nodes stay in place so shared prefixes survive.
    pub fn remove<C: Iterator<Item = char>>(&mut self, chars: C) -> bool {
        match self.root.find_mut(chars) {
            Some(node) if node.final_state => {
                node.final_state = false;
                self.size -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn exist<C: Iterator<Item = char>>(&self, chars: C) -> bool {
        self.root.find(chars).map_or(false, |node| node.final_state)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn build() -> Trie {
        let mut trie = Trie::default();
        trie.insert("Test".chars());
        trie.insert("Tea".chars());
        trie.insert("Background".chars());
        trie.insert("Back".chars());
        trie.insert("Brown".chars());
        trie.insert("申艳超".chars());
        trie.insert("blues小站".chars());
        trie
    }

    #[test]
    fn trie_exist() {
        let trie = build();
        assert!(!trie.exist("Testing".chars()));
        assert!(!trie.exist("Te".chars()));
        assert!(trie.exist("Brown".chars()));
        assert!(trie.exist("申艳超".chars()));
        assert!(!trie.exist("申超".chars()));
        assert!(!trie.exist("".chars()));
    }

    #[test]
    fn shorter_word_after_longer() {
        // "Back" is inserted after "Background" and must still be final
        let trie = build();
        assert!(trie.exist("Back".chars()));
        assert!(trie.exist("Background".chars()));
        assert!(!trie.exist("Backg".chars()));
    }

    #[test]
    fn trie_len_and_remove() {
        let mut trie = build();
        assert_eq!(trie.len(), 7);
        assert!(!trie.insert("Tea".chars()));
        assert!(!trie.insert("".chars()));
        assert_eq!(trie.len(), 7);

        assert!(trie.remove("Back".chars()));
        assert!(!trie.remove("Back".chars()));
        assert!(!trie.remove("Nope".chars()));
        assert_eq!(trie.len(), 6);
        assert!(!trie.exist("Back".chars()));
        assert!(trie.exist("Background".chars()));
    }
}
