// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{ElementRef, Html, Node, Selector};
use tracing::warn;

/// 其文本不属于可见文本的元素
const NON_VISIBLE_CONTAINERS: [&str; 4] = ["script", "style", "noscript", "template"];

/// 解析后的 HTML 文档
///
/// 基于 `scraper::Html`，节点存放在 arena 中，父节点通过索引访问，
/// 向上查找不会产生所有权环。构建后只读。
pub struct DocumentTree {
    html: Html,
}

/// 文档中的一个可见文本节点及其直接父元素
#[derive(Clone, Copy)]
pub struct TextNode<'a> {
    pub text: &'a str,
    pub parent: Option<ElementRef<'a>>,
}

impl DocumentTree {
    /// 解析 HTML 文本
    ///
    /// 空白或空字符串无法构成文档，返回 `None`
    pub fn parse(html: &str) -> Option<Self> {
        if html.trim().is_empty() {
            return None;
        }
        Some(Self {
            html: Html::parse_document(html),
        })
    }

    /// 按 CSS 选择器查找所有元素（文档顺序）
    ///
    /// 无效的选择器记录警告并返回空列表
    pub fn select(&self, css: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(css) {
            Ok(selector) => self.html.select(&selector).collect(),
            Err(e) => {
                warn!("Skipping invalid selector {:?}: {}", css, e);
                Vec::new()
            }
        }
    }

    /// 第一个匹配的元素
    pub fn select_first(&self, css: &str) -> Option<ElementRef<'_>> {
        self.select(css).into_iter().next()
    }

    /// 按文档顺序列出所有可见文本节点
    ///
    /// 脚本、样式等容器内的文本不计入
    pub fn text_nodes(&self) -> Vec<TextNode<'_>> {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(|node| {
                let Node::Text(text) = node.value() else {
                    return None;
                };
                let parent = node.parent().and_then(ElementRef::wrap);
                if parent.is_some_and(|p| is_non_visible(p.value().name())) {
                    return None;
                }
                Some(TextNode {
                    text: &**text,
                    parent,
                })
            })
            .collect()
    }

    /// `<html>` 根元素
    pub fn root_element(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}

fn is_non_visible(tag: &str) -> bool {
    NON_VISIBLE_CONTAINERS.contains(&tag)
}

/// 元素的可见文本
///
/// 每个文本片段去除首尾空白后直接拼接，不插入分隔符；跳过脚本和样式内容
pub fn visible_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    let mut stack: Vec<_> = element.children().rev().collect();

    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    out.push_str(trimmed);
                }
            }
            Node::Element(el) if is_non_visible(el.name()) => {}
            Node::Element(_) => stack.extend(node.children().rev()),
            _ => {}
        }
    }

    out
}

/// 最近的父元素；没有父元素时为 `None`
pub fn parent_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.parent().and_then(ElementRef::wrap)
}

/// 属性值，不存在时为空字符串
pub fn attr_or_empty(element: ElementRef<'_>, name: &str) -> String {
    element.value().attr(name).unwrap_or_default().to_string()
}

/// `class` 属性拆分后的类名列表，保持源顺序
pub fn class_list(element: ElementRef<'_>) -> Vec<String> {
    element
        .value()
        .attr("class")
        .map(|c| c.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// 元素 `id`，不存在时使用合成标识
pub fn id_or(element: ElementRef<'_>, fallback: impl FnOnce() -> String) -> String {
    element
        .value()
        .attr("id")
        .map(str::to_string)
        .unwrap_or_else(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_html_is_not_a_document() {
        assert!(DocumentTree::parse("").is_none());
        assert!(DocumentTree::parse("   \n\t ").is_none());
        assert!(DocumentTree::parse("<p>x</p>").is_some());
    }

    #[test]
    fn test_visible_text_strips_and_joins() {
        let doc = DocumentTree::parse(
            "<div id='d'>  Hello <b> world </b><script>var x = 1;</script><style>p{}</style>!</div>",
        )
        .unwrap();
        let div = doc.select_first("#d").unwrap();

        assert_eq!(visible_text(div), "Helloworld!");
    }

    #[test]
    fn test_text_nodes_in_document_order_with_parents() {
        let doc = DocumentTree::parse(
            "<body><p>first</p><script>hidden</script><span>second</span></body>",
        )
        .unwrap();
        let nodes: Vec<_> = doc
            .text_nodes()
            .into_iter()
            .filter(|n| !n.text.trim().is_empty())
            .collect();

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].text, "first");
        assert_eq!(nodes[0].parent.unwrap().value().name(), "p");
        assert_eq!(nodes[1].text, "second");
        assert_eq!(nodes[1].parent.unwrap().value().name(), "span");
    }

    #[test]
    fn test_class_list_keeps_order() {
        let doc = DocumentTree::parse("<div id='x' class='z-tab  a-tab m'></div>").unwrap();
        let div = doc.select_first("#x").unwrap();

        assert_eq!(class_list(div), vec!["z-tab", "a-tab", "m"]);
    }

    #[test]
    fn test_invalid_selector_yields_nothing() {
        let doc = DocumentTree::parse("<p>x</p>").unwrap();
        assert!(doc.select("[[[").is_empty());
    }

    #[test]
    fn test_id_fallback() {
        let doc = DocumentTree::parse("<a id='keep'>a</a><a>b</a>").unwrap();
        let links = doc.select("a");

        assert_eq!(id_or(links[0], || "link_0".to_string()), "keep");
        assert_eq!(id_or(links[1], || "link_1".to_string()), "link_1");
    }
}
