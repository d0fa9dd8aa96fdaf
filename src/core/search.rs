/// Counters collected during one segmentation call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Dictionary lookups made.
    pub probes: usize,
    /// Lookups that hit a dictionary word.
    pub matches: usize,
    /// Prefixes skipped because they were already known to fail.
    pub memo_hits: usize,
    /// Most words on the search stack at once.
    pub max_depth: usize,
}

/// Reusable scratch space for segmentation calls.
///
/// Holds the char boundaries of the current input, the table of prefixes
/// known not to segment, the stack of pending search frames and the stats
/// of the last call. Reusing one `Search` across calls saves the
/// allocations.
#[derive(Debug, Default, Clone)]
pub struct Search {
    // 每个字符的起始字节偏移，末尾追加输入长度
    pub(crate) boundaries: Vec<usize>,
    // failed[end] 表示前缀 [0, end) 无法切分
    pub(crate) failed: Vec<bool>,
    // 待回溯的搜索帧 (end, next_start)
    pub(crate) frames: Vec<(usize, usize)>,
    pub(crate) stats: SearchStats,
}

impl Search {
    pub(crate) fn reset(&mut self, input: &str) {
        self.boundaries.clear();
        self.boundaries
            .extend(input.char_indices().map(|(offset, _)| offset));
        self.boundaries.push(input.len());
        self.failed.clear();
        self.failed.resize(self.boundaries.len(), false);
        self.frames.clear();
        self.stats = SearchStats::default();
    }

    /// Length of the current input in chars.
    pub(crate) fn char_count(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Byte range of the chars `[start, end)` of the current input.
    pub(crate) fn byte_range(&self, start: usize, end: usize) -> std::ops::Range<usize> {
        self.boundaries[start]..self.boundaries[end]
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}
