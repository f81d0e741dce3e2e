// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 按字符数截断文本
///
/// 以 Unicode 标量为单位截断，不会切断多字节字符，也不考虑单词边界
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

/// 将关键词转换为记录键：小写，空格替换为下划线
pub fn keyword_key(keyword: &str) -> String {
    keyword.to_lowercase().replace(' ', "_")
}

/// 字符数量（而非字节数）
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
