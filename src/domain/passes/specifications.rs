// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::document::{class_list, visible_text, DocumentTree};
use crate::domain::models::record::{ListItem, SpecEntry};
use crate::domain::passes::vocabulary::{SPEC_PATTERNS, STRUCTURED_LIST_CLASS_PATTERN};
use crate::utils::text::char_len;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use scraper::{ElementRef, Selector};
use std::collections::BTreeMap;
use tracing::info;

/// 键短于该字符数的行视为无信息量
const MIN_KEY_CHARS: usize = 3;
/// 结构化列表条目的最小字符数（不含）
const MIN_LIST_ITEM_CHARS: usize = 5;
/// 正则规格键使用的模式前缀长度
const PATTERN_KEY_CHARS: usize = 20;
/// 正则匹配上下文的最小字符数（不含）
const MIN_REGEX_CONTEXT_CHARS: usize = 20;

static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("td, th").unwrap());
static TERM_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("dt").unwrap());
static DESCRIPTION_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("dd").unwrap());
static ITEM_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("li").unwrap());

static LIST_CLASS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(STRUCTURED_LIST_CLASS_PATTERN).unwrap());

static SPEC_REGEXES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    SPEC_PATTERNS
        .iter()
        .map(|p| {
            let re = RegexBuilder::new(p).case_insensitive(true).build().unwrap();
            (*p, re)
        })
        .collect()
});

/// 综合规格提取
///
/// 合并表格、定义列表、结构化列表和正则匹配四个来源
pub fn extract_comprehensive_specifications(doc: &DocumentTree) -> BTreeMap<String, SpecEntry> {
    info!("Extracting comprehensive specifications...");
    let mut specs = BTreeMap::new();

    for (i, table) in doc.select("table").into_iter().enumerate() {
        let table_data = table_pairs(table);
        if !table_data.is_empty() {
            specs.insert(format!("table_specs_{}", i), SpecEntry::Pairs(table_data));
        }
    }

    for (i, dl) in doc.select("dl").into_iter().enumerate() {
        let dl_data = definition_pairs(dl);
        if !dl_data.is_empty() {
            specs.insert(format!("definition_list_{}", i), SpecEntry::Pairs(dl_data));
        }
    }

    let structured_lists = doc.select("ul, ol").into_iter().filter(|list| {
        class_list(*list)
            .iter()
            .any(|c| LIST_CLASS_REGEX.is_match(c))
    });
    for (i, list) in structured_lists.enumerate() {
        let items = list_items(list);
        if !items.is_empty() {
            specs.insert(format!("structured_list_{}", i), SpecEntry::List(items));
        }
    }

    for (key, text) in regex_specs(doc) {
        specs.insert(key, SpecEntry::Text(text));
    }

    specs
}

/// 表格行读取为键值对：取前两个单元格
pub fn table_pairs(table: ElementRef<'_>) -> BTreeMap<String, String> {
    let mut data = BTreeMap::new();
    for row in table.select(&ROW_SELECTOR) {
        let cells: Vec<_> = row.select(&CELL_SELECTOR).take(2).collect();
        if let [key_cell, value_cell] = cells.as_slice() {
            insert_pair(&mut data, visible_text(*key_cell), visible_text(*value_cell));
        }
    }
    data
}

/// 定义列表按位置配对 `dt` 与 `dd`，多余的尾部丢弃
pub fn definition_pairs(dl: ElementRef<'_>) -> BTreeMap<String, String> {
    let mut data = BTreeMap::new();
    let terms = dl.select(&TERM_SELECTOR);
    let descriptions = dl.select(&DESCRIPTION_SELECTOR);
    for (dt, dd) in terms.zip(descriptions) {
        insert_pair(&mut data, visible_text(dt), visible_text(dd));
    }
    data
}

fn insert_pair(data: &mut BTreeMap<String, String>, key: String, value: String) {
    if key.is_empty() || value.is_empty() || char_len(&key) < MIN_KEY_CHARS {
        return;
    }
    data.insert(key, value);
}

fn list_items(list: ElementRef<'_>) -> Vec<ListItem> {
    list.select(&ITEM_SELECTOR)
        .map(visible_text)
        .filter(|text| char_len(text) > MIN_LIST_ITEM_CHARS)
        .map(|text| match text.split_once(':') {
            Some((key, value)) => ListItem::KeyValue {
                key: key.trim().to_string(),
                value: value.trim().to_string(),
            },
            None => ListItem::Text { text },
        })
        .collect()
}

/// 正则规格匹配
///
/// 键由模式源码前缀派生；父元素可见文本长于 20 个字符时写入，同一模式的后续匹配覆盖之前的结果
pub fn regex_specs(doc: &DocumentTree) -> BTreeMap<String, String> {
    let text_nodes = doc.text_nodes();
    let mut out = BTreeMap::new();

    for (pattern, re) in SPEC_REGEXES.iter() {
        let key = format!(
            "regex_match_{}",
            pattern.chars().take(PATTERN_KEY_CHARS).collect::<String>()
        );
        for node in &text_nodes {
            if !re.is_match(node.text) {
                continue;
            }
            let Some(parent) = node.parent else {
                continue;
            };
            let context = visible_text(parent);
            if char_len(&context) > MIN_REGEX_CONTEXT_CHARS {
                out.insert(key.clone(), context);
            }
        }
    }

    out
}
