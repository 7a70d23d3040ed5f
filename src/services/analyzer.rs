//! 字符分析 - 业务能力层
//!
//! 频次统计 + 元音包围的最长子串

/// 元音集合（含 y）
pub const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// 单个字符的出现次数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterCount {
    pub character: char,
    pub count: usize,
}

impl CharacterCount {
    /// 对外展示的描述文本
    pub fn describe(&self) -> String {
        format!(
            "Количество символов {} в обработанной строке = {}",
            self.character, self.count
        )
    }
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// 统计每个字符的出现次数，顺序为首次出现顺序
pub fn count_characters(input: &str) -> Vec<CharacterCount> {
    let mut counts: Vec<CharacterCount> = Vec::new();

    for c in input.chars() {
        match counts.iter_mut().find(|entry| entry.character == c) {
            Some(entry) => entry.count += 1,
            None => counts.push(CharacterCount {
                character: c,
                count: 1,
            }),
        }
    }

    counts
}

/// 查找首尾都是元音的最长子串
///
/// 只考虑 `i < j` 的元音对，单独一个元音不构成结果。
/// 长度相同时保留最先找到的（i 升序，再 j 升序）。
pub fn find_longest_substring(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut best: Option<(usize, usize)> = None;
    let mut max_length = 0;

    for i in 0..chars.len() {
        if !is_vowel(chars[i]) {
            continue;
        }
        for j in (i + 1)..chars.len() {
            if is_vowel(chars[j]) && j - i + 1 > max_length {
                max_length = j - i + 1;
                best = Some((i, j));
            }
        }
    }

    match best {
        Some((start, end)) => chars[start..=end].iter().collect(),
        None => String::new(),
    }
}
