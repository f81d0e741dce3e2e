// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::document::{attr_or_empty, class_list, id_or, parent_element, visible_text, DocumentTree};
use crate::domain::models::record::{ButtonEntry, FormEntry, FormInput, InteractiveEntry, LinkEntry};
use crate::utils::text::truncate_chars;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};
use std::collections::BTreeMap;
use tracing::info;

/// 交互元素上下文的最大字符数
pub const CONTEXT_LIMIT: usize = 500;

static INPUT_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("input").unwrap());

/// 按标签类型提取按钮、链接和表单
pub fn extract_interactive_elements(doc: &DocumentTree) -> BTreeMap<String, InteractiveEntry> {
    info!("Extracting interactive elements...");
    let mut interactive = BTreeMap::new();

    for (i, button) in doc.select("button").into_iter().enumerate() {
        let entry = ButtonEntry {
            index: i,
            text: visible_text(button),
            id: id_or(button, || format!("button_{}", i)),
            class: class_list(button),
            onclick: attr_or_empty(button, "onclick"),
            context: context_of(button),
        };
        interactive.insert(format!("button_{}", i), InteractiveEntry::Button(entry));
    }

    for (i, link) in doc.select("a").into_iter().enumerate() {
        let entry = LinkEntry {
            index: i,
            text: visible_text(link),
            href: attr_or_empty(link, "href"),
            id: id_or(link, || format!("link_{}", i)),
            class: class_list(link),
            context: context_of(link),
        };
        interactive.insert(format!("link_{}", i), InteractiveEntry::Link(entry));
    }

    for (i, form) in doc.select("form").into_iter().enumerate() {
        let inputs = form
            .select(&INPUT_SELECTOR)
            .map(|input| FormInput {
                input_type: attr_or_empty(input, "type"),
                name: attr_or_empty(input, "name"),
                id: attr_or_empty(input, "id"),
                placeholder: attr_or_empty(input, "placeholder"),
            })
            .collect();
        let entry = FormEntry {
            index: i,
            id: id_or(form, || format!("form_{}", i)),
            action: attr_or_empty(form, "action"),
            method: attr_or_empty(form, "method"),
            inputs,
        };
        interactive.insert(format!("form_{}", i), InteractiveEntry::Form(entry));
    }

    interactive
}

fn context_of(element: ElementRef<'_>) -> Option<String> {
    parent_element(element).map(|p| truncate_chars(&visible_text(p), CONTEXT_LIMIT))
}
