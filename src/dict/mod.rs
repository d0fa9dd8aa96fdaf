pub mod dictionary;
pub mod loader;
pub mod trie;
