// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::document::{attr_or_empty, class_list, visible_text, DocumentTree};
use crate::domain::models::record::{Heading, Image, MainContent, PageMetadata, SectionBlock};
use crate::utils::text::{char_len, truncate_chars};
use tracing::info;

/// 段落的最小字符数（不含）
const MIN_PARAGRAPH_CHARS: usize = 20;
/// 分区内容的最大字符数
pub const SECTION_CONTENT_LIMIT: usize = 1000;

/// 主体内容：标题、段落、图片和分区
pub fn extract_main_content(doc: &DocumentTree) -> MainContent {
    info!("Extracting main content...");
    let mut content = MainContent::default();

    for heading in doc.select("h1, h2, h3, h4, h5, h6") {
        let text = visible_text(heading);
        if !text.is_empty() {
            content.headings.push(Heading {
                level: heading.value().name().to_string(),
                text,
            });
        }
    }

    content.paragraphs = doc
        .select("p")
        .into_iter()
        .map(visible_text)
        .filter(|text| char_len(text) > MIN_PARAGRAPH_CHARS)
        .collect();

    content.images = doc
        .select("img[src]")
        .into_iter()
        .filter_map(|img| {
            let src = attr_or_empty(img, "src");
            (!src.is_empty()).then(|| Image {
                src,
                alt: attr_or_empty(img, "alt"),
                title: attr_or_empty(img, "title"),
            })
        })
        .collect();

    for element in doc.select("section, div") {
        let id = attr_or_empty(element, "id");
        let classes = class_list(element);
        let is_section = classes
            .iter()
            .any(|c| c.to_lowercase().contains("section"));
        if id.is_empty() && !is_section {
            continue;
        }
        content.sections.push(SectionBlock {
            id,
            class: classes,
            content: truncate_chars(&visible_text(element), SECTION_CONTENT_LIMIT),
        });
    }

    content
}

/// 页面级元数据；缺失的元素取空字符串
pub fn extract_page_metadata(doc: &DocumentTree) -> PageMetadata {
    info!("Extracting page metadata...");
    PageMetadata {
        title: doc
            .select_first("title")
            .map(visible_text)
            .unwrap_or_default(),
        meta_description: doc
            .select_first(r#"meta[name="description"]"#)
            .map(|m| attr_or_empty(m, "content"))
            .unwrap_or_default(),
        meta_keywords: doc
            .select_first(r#"meta[name="keywords"]"#)
            .map(|m| attr_or_empty(m, "content"))
            .unwrap_or_default(),
        canonical_url: doc
            .select_first(r#"link[rel~="canonical"]"#)
            .map(|l| attr_or_empty(l, "href"))
            .unwrap_or_default(),
        language: attr_or_empty(doc.root_element(), "lang"),
    }
}

/// 外部脚本地址
pub fn extract_scripts(doc: &DocumentTree) -> Vec<String> {
    doc.select("script[src]")
        .into_iter()
        .map(|s| attr_or_empty(s, "src"))
        .filter(|src| !src.is_empty())
        .collect()
}

/// 外部样式表地址
pub fn extract_stylesheets(doc: &DocumentTree) -> Vec<String> {
    doc.select(r#"link[rel~="stylesheet"][href]"#)
        .into_iter()
        .map(|l| attr_or_empty(l, "href"))
        .filter(|href| !href.is_empty())
        .collect()
}

/// 非空的内联 `<style>` 内容
pub fn extract_inline_styles(doc: &DocumentTree) -> Vec<String> {
    doc.select("style")
        .into_iter()
        .map(|style| style.text().collect::<String>().trim().to_string())
        .filter(|css| !css.is_empty())
        .collect()
}
