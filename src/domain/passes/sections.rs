// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::document::{attr_or_empty, class_list, id_or, parent_element, visible_text, DocumentTree};
use crate::domain::models::record::{ExpandableEntry, SectionEntry, TabEntry};
use crate::domain::passes::vocabulary::{EXPANDABLE_SELECTORS, TAB_SELECTORS};
use crate::utils::text::truncate_chars;
use std::collections::BTreeMap;
use tracing::info;

/// 标签页内容的最大字符数
pub const TAB_CONTENT_LIMIT: usize = 1000;

/// 选择器扫描：标签页、分区和可展开元素
///
/// 每个选择器的每个命中元素产生一个条目，键为 `tab_{selector}_{i}` 或
/// `expandable_{selector}_{i}`。同一元素可能被多个选择器重复命中。
pub fn extract_tabs_and_sections(doc: &DocumentTree) -> BTreeMap<String, SectionEntry> {
    info!("Extracting all tabs and sections...");
    let mut all_content = BTreeMap::new();

    for selector in TAB_SELECTORS {
        for (i, tab) in doc.select(selector).into_iter().enumerate() {
            // Root-level matches fall back to their own text
            let content_source = parent_element(tab).unwrap_or(tab);
            let entry = TabEntry {
                kind: selector.to_string(),
                index: i,
                id: id_or(tab, || format!("tab_{}", i)),
                class: class_list(tab),
                text: visible_text(tab),
                content: Some(truncate_chars(
                    &visible_text(content_source),
                    TAB_CONTENT_LIMIT,
                )),
            };
            all_content.insert(format!("tab_{}_{}", selector, i), SectionEntry::Tab(entry));
        }
    }

    for selector in EXPANDABLE_SELECTORS {
        for (i, element) in doc.select(selector).into_iter().enumerate() {
            let entry = ExpandableEntry {
                kind: "expandable".to_string(),
                selector: selector.to_string(),
                index: i,
                id: id_or(element, || format!("expandable_{}", i)),
                aria_expanded: attr_or_empty(element, "aria-expanded"),
                text: visible_text(element),
                parent_content: parent_element(element)
                    .map(|p| truncate_chars(&visible_text(p), TAB_CONTENT_LIMIT)),
            };
            all_content.insert(
                format!("expandable_{}_{}", selector, i),
                SectionEntry::Expandable(entry),
            );
        }
    }

    all_content
}
