// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::document::{visible_text, DocumentTree};
use crate::domain::models::record::KeywordPayload;
use crate::domain::passes::vocabulary::{
    ACCESSORY_KEYWORDS, COMPARISON_PATTERN, CONNECTIVITY_KEYWORDS, CONTROL_KEYWORDS,
    GAMING_KEYWORDS, PRICING_KEYWORDS, TECHNICAL_KEYWORDS, USE_CASE_KEYWORDS,
};
use crate::utils::text::{char_len, keyword_key};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::info;

/// 多数关键词类别的上下文最小长度（不含）
const DEFAULT_MIN_CONTEXT: usize = 20;
/// 使用场景类别的上下文最小长度（不含）
const USE_CASE_MIN_CONTEXT: usize = 30;
/// 型号对比文本的最小长度（不含）
const COMPARISON_MIN_CONTEXT: usize = 30;

static COMPARISON_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(COMPARISON_PATTERN)
        .case_insensitive(true)
        .build()
        .unwrap()
});

/// 关键词上下文提取
///
/// 对每个关键词，查找所有大小写不敏感包含该关键词的文本节点；父元素可见文本
/// 长于 `min_len` 个字符时写入 `keyword_key(keyword)`，后出现的匹配覆盖先前的。
pub fn keyword_context_pass(doc: &DocumentTree, keywords: &[&str], min_len: usize) -> KeywordPayload {
    let text_nodes = doc.text_nodes();
    let mut out = KeywordPayload::new();

    for keyword in keywords {
        let needle = keyword.to_lowercase();
        let key = keyword_key(keyword);
        for node in &text_nodes {
            if !node.text.to_lowercase().contains(&needle) {
                continue;
            }
            let Some(parent) = node.parent else {
                continue;
            };
            let context = visible_text(parent);
            if char_len(&context) > min_len {
                out.insert(key.clone(), context);
            }
        }
    }

    out
}

pub fn extract_gaming_features(doc: &DocumentTree) -> KeywordPayload {
    info!("Extracting gaming features...");
    keyword_context_pass(doc, &GAMING_KEYWORDS, DEFAULT_MIN_CONTEXT)
}

pub fn extract_controls_and_interface(doc: &DocumentTree) -> KeywordPayload {
    info!("Extracting controls and interface...");
    keyword_context_pass(doc, &CONTROL_KEYWORDS, DEFAULT_MIN_CONTEXT)
}

pub fn extract_connectivity_and_ports(doc: &DocumentTree) -> KeywordPayload {
    info!("Extracting connectivity and ports...");
    keyword_context_pass(doc, &CONNECTIVITY_KEYWORDS, DEFAULT_MIN_CONTEXT)
}

pub fn extract_technical_details(doc: &DocumentTree) -> KeywordPayload {
    info!("Extracting technical details...");
    keyword_context_pass(doc, &TECHNICAL_KEYWORDS, DEFAULT_MIN_CONTEXT)
}

pub fn extract_accessories_and_packaging(doc: &DocumentTree) -> KeywordPayload {
    info!("Extracting accessories and packaging...");
    keyword_context_pass(doc, &ACCESSORY_KEYWORDS, DEFAULT_MIN_CONTEXT)
}

pub fn extract_use_cases_and_scenarios(doc: &DocumentTree) -> KeywordPayload {
    info!("Extracting use cases and scenarios...");
    keyword_context_pass(doc, &USE_CASE_KEYWORDS, USE_CASE_MIN_CONTEXT)
}

pub fn extract_pricing_and_availability(doc: &DocumentTree) -> KeywordPayload {
    info!("Extracting pricing and availability...");
    keyword_context_pass(doc, &PRICING_KEYWORDS, DEFAULT_MIN_CONTEXT)
}

/// 型号对比文本
///
/// 与关键词上下文不同，这里逐条追加：键为 `comparison_{n}`，n 为当前条目数
pub fn extract_model_comparisons(doc: &DocumentTree) -> KeywordPayload {
    info!("Extracting model comparisons...");
    let mut out = KeywordPayload::new();

    for node in doc.text_nodes() {
        if !COMPARISON_REGEX.is_match(node.text) {
            continue;
        }
        let Some(parent) = node.parent else {
            continue;
        };
        let context = visible_text(parent);
        if char_len(&context) > COMPARISON_MIN_CONTEXT {
            let key = format!("comparison_{}", out.len());
            out.insert(key, context);
        }
    }

    out
}
