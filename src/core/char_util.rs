use phf::{phf_set, Set};

// 不能出现在词条中的标点符号
static SPECIAL_CHARS: Set<char> = phf_set! {
    // 英文特殊字符
    '!',
    '"',
    '#',
    '$',
    '%',
    '&',
    '(',
    ')',
    '*',
    '+',
    ',',
    '.',
    '/',
    ':',
    ';',
    '<',
    '=',
    '>',
    '?',
    '@',
    '[',
    '\\',
    ']',
    '^',
    '`',
    '{',
    '|',
    '}',
    '~',
    '¥',
    // 中文特殊字符
    '、',
    '。',
    '《',
    '》',
    '「',
    '」',
    '【',
    '】',
    '！',
    '（',
    '）',
    '，',
    '：',
    '；',
    '？',
    '～',
};

/// Whether `c` may appear inside a dictionary word.
///
/// Whitespace, control characters and punctuation delimit words, so an
/// entry carrying one can never match delimiter-free input.
pub fn is_word_char(c: char) -> bool {
    !(c.is_whitespace() || c.is_control() || SPECIAL_CHARS.contains(&c))
}

// full char -> half char && lowercase
pub fn regularize(input: char) -> char {
    let mut input_code = input as u32;
    if input_code == 12288 {
        input_code -= 12256; // 空格
    } else if (65281..=65374).contains(&input_code) {
        input_code -= 65248; // 全角字符
    }

    char::from_u32(input_code)
        .unwrap_or(input)
        .to_ascii_lowercase()
}

pub fn regularize_str(input: &str) -> String {
    input.chars().map(regularize).collect()
}
