pub mod config;
pub mod core;
pub mod dict;
pub mod error;

use std::sync::Arc;

use log::debug;
use tantivy::tokenizer::{BoxTokenStream, Token, TokenStream, Tokenizer};

use crate::core::char_util::regularize_str;

pub use crate::config::configuration::{Configuration, SegConfig};
pub use crate::core::bounds::{WordBounds, MAX_WORD_LEN, MIN_WORD_LEN};
pub use crate::core::search::{Search, SearchStats};
pub use crate::core::segmentor::Segmenter;
pub use crate::core::suffix_segmenter::SuffixSegmenter;
pub use crate::dict::dictionary::{Dictionary, WordDictionary};
pub use crate::error::{ConfigError, DictError, SegmentError};

/// tantivy tokenizer emitting one token per dictionary word.
///
/// Text that cannot be segmented is emitted as a single token. With
/// normalization on, text is regularized before segmenting like the
/// dictionary words were; token text is the regularized word while
/// offsets point into the original text.
pub struct SegTokenizer<D> {
    segmenter: Arc<SuffixSegmenter<D>>,
    normalize: bool,
}

impl<D> Clone for SegTokenizer<D> {
    fn clone(&self) -> Self {
        SegTokenizer {
            segmenter: Arc::clone(&self.segmenter),
            normalize: self.normalize,
        }
    }
}

pub struct SegTokenStream {
    tokens: Vec<Token>,
    index: usize,
}

impl TokenStream for SegTokenStream {
    fn advance(&mut self) -> bool {
        if self.index < self.tokens.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    fn token(&self) -> &Token {
        &self.tokens[self.index - 1]
    }

    fn token_mut(&mut self) -> &mut Token {
        &mut self.tokens[self.index - 1]
    }
}

impl<D: Dictionary> SegTokenizer<D> {
    pub fn new(segmenter: SuffixSegmenter<D>) -> Self {
        Self::from_shared(Arc::new(segmenter))
    }

    pub fn from_shared(segmenter: Arc<SuffixSegmenter<D>>) -> Self {
        Self {
            segmenter,
            normalize: false,
        }
    }

    /// Takes the normalization flag from the config the dictionary was
    /// loaded with.
    pub fn from_config(segmenter: SuffixSegmenter<D>, cfg: &dyn Configuration) -> Self {
        Self::new(segmenter).with_normalize(cfg.normalize_words())
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }
}

impl<D> Tokenizer for SegTokenizer<D>
where
    D: Dictionary + Send + Sync + 'static,
{
    fn token_stream<'a>(&self, text: &'a str) -> BoxTokenStream<'a> {
        let regularized;
        let source = if self.normalize {
            regularized = regularize_str(text);
            regularized.as_str()
        } else {
            text
        };
        let words = match self.segmenter.segment_to_tokens(source) {
            Ok(words) => words,
            Err(e) => {
                debug!("keep {:?} as a single token: {}", text, e);
                vec![source]
            }
        };
        // regularize 逐字符映射，按字符位置换算回原文的字节偏移
        let mut offsets: Vec<usize> = text.char_indices().map(|(offset, _)| offset).collect();
        offsets.push(text.len());
        let mut tokens = Vec::with_capacity(words.len());
        let mut char_pos = 0;
        for (position, word) in words.into_iter().enumerate() {
            let char_end = char_pos + word.chars().count();
            tokens.push(Token {
                offset_from: offsets[char_pos],
                offset_to: offsets[char_end],
                position,
                text: word.to_string(),
                position_length: 1,
            });
            char_pos = char_end;
        }
        BoxTokenStream::from(SegTokenStream { tokens, index: 0 })
    }
}

#[cfg(test)]
mod tests {
    use tantivy::tokenizer::*;

    use crate::{SegConfig, SegTokenizer, SuffixSegmenter, WordDictionary};

    fn numbers() -> WordDictionary {
        WordDictionary::from_words([
            "one", "two", "three", "four", "five", "fi", "vet", "wo", "北京", "大学",
        ])
    }

    fn tokenizer() -> SegTokenizer<WordDictionary> {
        SegTokenizer::new(SuffixSegmenter::new(numbers()))
    }

    fn collect_with(tokenizer: &SegTokenizer<WordDictionary>, text: &str) -> Vec<Token> {
        let mut token_stream = tokenizer.token_stream(text);
        let mut tokens = Vec::new();
        while let Some(token) = token_stream.next() {
            tokens.push(token.clone());
        }
        tokens
    }

    fn collect(text: &str) -> Vec<Token> {
        collect_with(&tokenizer(), text)
    }

    fn spans(tokens: &[Token]) -> Vec<(&str, usize, usize)> {
        tokens
            .iter()
            .map(|t| (t.text.as_str(), t.offset_from, t.offset_to))
            .collect()
    }

    fn test_once(text: &str, expect_tokens: Vec<&str>) {
        let token_text: Vec<String> = collect(text).into_iter().map(|t| t.text).collect();
        assert_eq!(token_text, expect_tokens);
    }

    #[test]
    fn tantivy_seg_works() {
        test_once(
            "threefourfiveonetwo",
            vec!["three", "four", "five", "one", "two"],
        );
        test_once("北京大学", vec!["北京", "大学"]);
    }

    #[test]
    fn token_offsets_cover_text() {
        let tokens = collect("onefivetwo");
        let spans: Vec<(usize, usize, usize)> = tokens
            .iter()
            .map(|t| (t.offset_from, t.offset_to, t.position))
            .collect();
        assert_eq!(spans, vec![(0, 3, 0), (3, 7, 1), (7, 10, 2)]);

        let tokens = collect("北京大学");
        assert_eq!(tokens[1].offset_from, 6);
        assert_eq!(tokens[1].offset_to, 12);
    }

    #[test]
    fn unsegmentable_text_is_one_token() {
        test_once("onexyz", vec!["onexyz"]);
        test_once("", vec![]);
    }

    #[test]
    fn exhausted_budget_keeps_whole_text() {
        let segmenter = SuffixSegmenter::new(numbers()).with_search_budget(Some(3));
        let tokenizer = SegTokenizer::new(segmenter);
        let tokens = collect_with(&tokenizer, "threefourfiveonetwo");
        assert_eq!(spans(&tokens), vec![("threefourfiveonetwo", 0, 19)]);
        assert_eq!(tokens[0].position, 0);
    }

    #[test]
    fn normalized_text_keeps_original_offsets() {
        let cfg = SegConfig {
            normalize: true,
            ..SegConfig::default()
        };
        let tokenizer = SegTokenizer::from_config(SuffixSegmenter::new(numbers()), &cfg);
        // full-width chars take 3 bytes in the original text
        let tokens = collect_with(&tokenizer, "ＯＮＥTwo");
        assert_eq!(spans(&tokens), vec![("one", 0, 9), ("two", 9, 12)]);

        let tokens = collect_with(&tokenizer, "ONETWOx");
        assert_eq!(spans(&tokens), vec![("onetwox", 0, 7)]);

        let tokens = collect("ＯＮＥTwo");
        assert_eq!(spans(&tokens), vec![("ＯＮＥTwo", 0, 12)]);
    }

    #[test]
    fn long_text_is_tokenized() {
        let text = "one".repeat(40_000);
        let tokens = collect(&text);
        assert_eq!(tokens.len(), 40_000);
        let last = &tokens[39_999];
        assert_eq!((last.offset_from, last.offset_to), (119_997, 120_000));
        assert_eq!(last.position, 39_999);
    }
}
