use crate::core::search::Search;
use crate::error::SegmentError;

pub trait Segmenter {
    /// Splits `input` into words in reading order, borrowing from `input`.
    ///
    /// Empty input yields an empty list; an input with no complete
    /// decomposition yields [`SegmentError::NoSegmentation`].
    fn segment<'a>(
        &self,
        input: &'a str,
        search: &mut Search,
    ) -> Result<Vec<&'a str>, SegmentError>;

    fn name(&self) -> &str;

    fn segment_to_tokens<'a>(&self, input: &'a str) -> Result<Vec<&'a str>, SegmentError> {
        let mut search = Search::default();
        self.segment(input, &mut search)
    }

    /// Words joined by a single space.
    fn segment_to_string(&self, input: &str) -> Result<String, SegmentError> {
        self.segment_to_tokens(input).map(|tokens| tokens.join(" "))
    }
}
