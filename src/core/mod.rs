pub mod bounds;
pub mod char_util;
pub mod search;
pub mod segmentor;
pub mod suffix_segmenter;
