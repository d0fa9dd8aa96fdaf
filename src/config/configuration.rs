use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::bounds::{WordBounds, MAX_WORD_LEN, MIN_WORD_LEN};
use crate::error::ConfigError;

/// Settings consumed by the dictionary loader and the segmenter builder.
pub trait Configuration {
    fn get_main_dictionary(&self) -> Option<&Path>;
    fn get_ext_dictionaries(&self) -> &[PathBuf];
    fn get_disabled_dictionaries(&self) -> &[PathBuf];
    fn get_word_bounds(&self) -> Result<WordBounds, ConfigError>;
    fn use_memo(&self) -> bool;
    fn get_search_budget(&self) -> Option<usize>;
    fn normalize_words(&self) -> bool;
}

/// YAML backed configuration.
///
/// ```yaml
/// main_dictionary: dict/main.dic
/// ext_dictionaries: [dict/ext.dic]
/// min_word_len: 2
/// max_word_len: 28
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegConfig {
    // 主词典
    pub main_dictionary: Option<PathBuf>,
    // 扩展词典
    pub ext_dictionaries: Vec<PathBuf>,
    // 屏蔽词典，其中的词从主词典移除
    pub disabled_dictionaries: Vec<PathBuf>,
    pub min_word_len: usize,
    pub max_word_len: usize,
    pub memoize: bool,
    /// Max dictionary probes per segmentation call, unlimited when absent.
    pub search_budget: Option<usize>,
    /// Full-width to half-width and lowercase words while loading; text
    /// must then be regularized the same way before segmenting.
    pub normalize: bool,
}

impl Default for SegConfig {
    fn default() -> Self {
        SegConfig {
            main_dictionary: None,
            ext_dictionaries: Vec::new(),
            disabled_dictionaries: Vec::new(),
            min_word_len: MIN_WORD_LEN,
            max_word_len: MAX_WORD_LEN,
            memoize: true,
            search_budget: None,
            normalize: false,
        }
    }
}

impl SegConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let cfg: SegConfig = serde_yaml::from_str(yaml)?;
        cfg.get_word_bounds()?;
        Ok(cfg)
    }

    /// Reads a YAML file. Relative dictionary paths are resolved
    /// against the directory holding the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut cfg = Self::from_yaml_str(&yaml)?;
        if let Some(base) = path.parent() {
            cfg.resolve_paths(base);
        }
        Ok(cfg)
    }

    fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(p.as_path());
            }
        };
        if let Some(main) = self.main_dictionary.as_mut() {
            resolve(main);
        }
        self.ext_dictionaries.iter_mut().for_each(resolve);
        self.disabled_dictionaries.iter_mut().for_each(resolve);
    }
}

impl Configuration for SegConfig {
    fn get_main_dictionary(&self) -> Option<&Path> {
        self.main_dictionary.as_deref()
    }

    fn get_ext_dictionaries(&self) -> &[PathBuf] {
        &self.ext_dictionaries
    }

    fn get_disabled_dictionaries(&self) -> &[PathBuf] {
        &self.disabled_dictionaries
    }

    fn get_word_bounds(&self) -> Result<WordBounds, ConfigError> {
        WordBounds::new(self.min_word_len, self.max_word_len)
    }

    fn use_memo(&self) -> bool {
        self.memoize
    }

    fn get_search_budget(&self) -> Option<usize> {
        self.search_budget
    }

    fn normalize_words(&self) -> bool {
        self.normalize
    }
}
