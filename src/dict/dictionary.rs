use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;
use std::sync::Arc;

use log::info;

use crate::config::configuration::Configuration;
use crate::dict::loader::load_word_file;
use crate::dict::trie::Trie;
use crate::error::DictError;

/// Word membership test consumed by the segmenter.
///
/// Implementations must be pure: the segmenter may ask about the same
/// word any number of times during one call.
pub trait Dictionary {
    fn contains(&self, word: &str) -> bool;
}

impl<S: BuildHasher> Dictionary for HashSet<String, S> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl<S: BuildHasher> Dictionary for HashSet<&str, S> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl Dictionary for BTreeSet<String> {
    fn contains(&self, word: &str) -> bool {
        BTreeSet::contains(self, word)
    }
}

impl Dictionary for Trie {
    fn contains(&self, word: &str) -> bool {
        self.exist(word.chars())
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Arc<D> {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// Dictionary Manager
///
/// Built once from word lists, then shared read-only.
#[derive(Debug, Default)]
pub struct WordDictionary {
    // 主词典对象
    main_dict: Trie,
}

impl WordDictionary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = WordDictionary::default();
        dict.add_words(words);
        dict
    }

    /// Loads the main dictionary and extension dictionaries, then removes
    /// every word listed in the disabled dictionaries.
    pub fn load(cfg: &dyn Configuration) -> Result<Self, DictError> {
        let mut dict = WordDictionary::default();
        let normalize = cfg.normalize_words();
        // 加载主词典
        if let Some(main_dict_path) = cfg.get_main_dictionary() {
            let words = load_word_file(main_dict_path, normalize)?;
            info!("load main_dict size = {}", words.len());
            dict.add_words(words);
        }
        // 加载扩展词典
        let mut total = 0_usize;
        for ext_dict_file in cfg.get_ext_dictionaries() {
            let words = load_word_file(ext_dict_file, normalize)?;
            total += words.len();
            dict.add_words(words);
        }
        info!("ext dict total size = {}", total);
        // 屏蔽词条
        let mut total = 0_usize;
        for disabled_file in cfg.get_disabled_dictionaries() {
            let words = load_word_file(disabled_file, normalize)?;
            total += words.len();
            dict.disable_words(words);
        }
        info!("disabled dict total size = {}", total);
        info!("dictionary ready with {} words", dict.len());
        Ok(dict)
    }

    // 批量加载新词条
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.main_dict.insert(word.as_ref().chars());
        }
    }

    // 批量移除（屏蔽）词条
    pub fn disable_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.main_dict.remove(word.as_ref().chars());
        }
    }

    pub fn len(&self) -> usize {
        self.main_dict.len()
    }

    pub fn is_empty(&self) -> bool {
        self.main_dict.is_empty()
    }
}

impl Dictionary for WordDictionary {
    fn contains(&self, word: &str) -> bool {
        self.main_dict.contains(word)
    }
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use super::*;
    use crate::config::configuration::SegConfig;

    #[test]
    fn std_sets_are_dictionaries() {
        let hash: HashSet<String> = ["one".to_string()].into_iter().collect();
        let borrowed: HashSet<&str> = ["one"].into_iter().collect();
        let tree: BTreeSet<String> = ["one".to_string()].into_iter().collect();
        let dicts: Vec<Box<dyn Dictionary>> =
            vec![Box::new(hash), Box::new(borrowed), Box::new(tree)];
        for dict in dicts.iter() {
            assert!(dict.contains("one"));
            assert!(!dict.contains("on"));
            assert!(!dict.contains(""));
        }
    }

    #[test]
    fn add_and_disable_words() {
        let mut dictionary = WordDictionary::from_words(["abcd", "blues", "ab"]);
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("ab"));
        dictionary.disable_words(["ab", "zz"]);
        assert_eq!(dictionary.len(), 2);
        assert!(!dictionary.contains("ab"));
        assert!(dictionary.contains("abcd"));
        let shared = Arc::new(dictionary);
        assert!(shared.contains("blues"));
    }

    #[test]
    fn load_from_config() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("resources/seg.yml");
        let cfg = SegConfig::from_file(path).unwrap();
        let dictionary = WordDictionary::load(&cfg).unwrap();
        for word in ["one", "two", "three", "four", "five", "fi", "vet", "wo", "icecream"] {
            assert!(dictionary.contains(word), "{} should be loaded", word);
        }
        // listed in disabled.dic
        assert!(!dictionary.contains("tw"));
    }

    #[test]
    fn load_missing_dictionary_fails() {
        let cfg = SegConfig {
            ext_dictionaries: vec!["missing.dic".into()],
            ..SegConfig::default()
        };
        assert!(matches!(
            WordDictionary::load(&cfg),
            Err(DictError::Io { .. })
        ));
    }
}
