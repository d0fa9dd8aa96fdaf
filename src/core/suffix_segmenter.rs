use log::trace;

use crate::config::configuration::Configuration;
use crate::core::bounds::WordBounds;
use crate::core::search::Search;
use crate::core::segmentor::Segmenter;
use crate::dict::dictionary::Dictionary;
use crate::error::{ConfigError, SegmentError};

// 子分词器标签
const SEGMENTER_NAME: &str = "SUFFIX_SEGMENTER";

/// Dictionary driven segmenter.
///
/// Works from the end of the input toward its head. At each step the
/// trailing candidates are tried longest first, within the word-length
/// bounds; when a candidate is a dictionary word the search descends into
/// the remaining prefix, and backs up to the next shorter candidate when
/// that prefix cannot be split. The first complete decomposition wins, so
/// for a given dictionary and bounds the result is always the same one.
///
/// Pending candidates live on an explicit stack in [`Search`], so input
/// length does not bound the thread stack.
///
/// Prefixes that fail are remembered for the rest of the call when
/// memoization is on. This only skips repeated work and never changes
/// which decomposition is returned.
#[derive(Debug, Clone)]
pub struct SuffixSegmenter<D> {
    dict: D,
    bounds: WordBounds,
    memoize: bool,
    // 单次切分最多查询词典的次数
    search_budget: Option<usize>,
}

impl<D: Dictionary> SuffixSegmenter<D> {
    pub fn new(dict: D) -> Self {
        SuffixSegmenter {
            dict,
            bounds: WordBounds::default(),
            memoize: true,
            search_budget: None,
        }
    }

    pub fn from_config(dict: D, cfg: &dyn Configuration) -> Result<Self, ConfigError> {
        Ok(Self::new(dict)
            .with_bounds(cfg.get_word_bounds()?)
            .with_memo(cfg.use_memo())
            .with_search_budget(cfg.get_search_budget()))
    }

    pub fn with_bounds(mut self, bounds: WordBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_memo(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    pub fn with_search_budget(mut self, search_budget: Option<usize>) -> Self {
        self.search_budget = search_budget;
        self
    }

    pub fn dictionary(&self) -> &D {
        &self.dict
    }

    pub fn bounds(&self) -> WordBounds {
        self.bounds
    }

    // 自尾向头搜索，search.frames 中每帧为 (end, next_start)
    // 成功时返回按阅读顺序排列的词元
    fn split<'a>(
        &self,
        input: &'a str,
        search: &mut Search,
    ) -> Result<Option<Vec<&'a str>>, SegmentError> {
        let total = search.char_count();
        if total == 0 {
            return Ok(Some(Vec::new()));
        }
        self.push_frame(total, search);

        loop {
            let (end, start) = match search.frames.last() {
                Some(&frame) => frame,
                None => return Ok(None),
            };
            // start 由左向右，即后缀由长到短
            if end < self.bounds.min() || start > end - self.bounds.min() {
                search.frames.pop();
                if self.memoize {
                    search.failed[end] = true;
                }
                continue;
            }
            if let Some(frame) = search.frames.last_mut() {
                frame.1 += 1;
            }

            if let Some(budget) = self.search_budget {
                if search.stats.probes >= budget {
                    return Err(SegmentError::SearchAborted {
                        probes: search.stats.probes,
                    });
                }
            }
            search.stats.probes += 1;
            if !self.dict.contains(&input[search.byte_range(start, end)]) {
                continue;
            }
            search.stats.matches += 1;

            if start == 0 {
                let tokens = search
                    .frames
                    .iter()
                    .rev()
                    .map(|&(end, next)| &input[search.byte_range(next - 1, end)])
                    .collect();
                return Ok(Some(tokens));
            }
            if search.failed[start] {
                search.stats.memo_hits += 1;
                continue;
            }
            self.push_frame(start, search);
        }
    }

    fn push_frame(&self, end: usize, search: &mut Search) {
        search
            .frames
            .push((end, end.saturating_sub(self.bounds.max())));
        search.stats.max_depth = search.stats.max_depth.max(search.frames.len());
    }
}

impl<D: Dictionary> Segmenter for SuffixSegmenter<D> {
    fn segment<'a>(
        &self,
        input: &'a str,
        search: &mut Search,
    ) -> Result<Vec<&'a str>, SegmentError> {
        search.reset(input);
        let found = self.split(input, search);
        trace!("segment {:?}: {:?}", input, search.stats());
        found?.ok_or(SegmentError::NoSegmentation)
    }

    fn name(&self) -> &str {
        SEGMENTER_NAME
    }
}
