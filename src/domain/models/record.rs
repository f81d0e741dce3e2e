// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::fetch_result::FetchMethod;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// 关键词上下文类类别的载荷：归一化关键词 -> 父元素文本
pub type KeywordPayload = BTreeMap<String, String>;

/// 标签页/分区扫描条目
///
/// `tab_*` 与 `expandable_*` 两种形状共享同一个类别
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionEntry {
    Tab(TabEntry),
    Expandable(ExpandableEntry),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabEntry {
    /// 命中的选择器
    #[serde(rename = "type")]
    pub kind: String,
    pub index: usize,
    pub id: String,
    pub class: Vec<String>,
    pub text: String,
    /// 父元素文本，最多 1000 个字符
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandableEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub selector: String,
    pub index: usize,
    pub id: String,
    pub aria_expanded: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_content: Option<String>,
}

/// 交互元素条目，按 `type` 字段区分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InteractiveEntry {
    Button(ButtonEntry),
    Link(LinkEntry),
    Form(FormEntry),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonEntry {
    pub index: usize,
    pub text: String,
    pub id: String,
    pub class: Vec<String>,
    pub onclick: String,
    /// 父元素文本，最多 500 个字符
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub index: usize,
    pub text: String,
    pub href: String,
    pub id: String,
    pub class: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormEntry {
    pub index: usize,
    pub id: String,
    pub action: String,
    pub method: String,
    pub inputs: Vec<FormInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    #[serde(rename = "type")]
    pub input_type: String,
    pub name: String,
    pub id: String,
    pub placeholder: String,
}

/// 规格条目
///
/// 表格/定义列表产生键值映射，结构化列表产生条目列表，正则匹配产生单段文本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecEntry {
    Pairs(BTreeMap<String, String>),
    List(Vec<ListItem>),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListItem {
    KeyValue { key: String, value: String },
    Text { text: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MainContent {
    pub headings: Vec<Heading>,
    pub paragraphs: Vec<String>,
    pub images: Vec<Image>,
    pub sections: Vec<SectionBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub level: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBlock {
    pub id: String,
    pub class: Vec<String>,
    pub content: String,
}

/// 页面元数据，缺失的元素一律为空字符串
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub canonical_url: String,
    pub language: String,
}

/// 记录中的类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    AllTabsAndSections,
    InteractiveElements,
    ComprehensiveSpecifications,
    MainContent,
    GamingFeatures,
    ModelComparisons,
    ControlsAndInterface,
    ConnectivityAndPorts,
    TechnicalDetails,
    AccessoriesAndPackaging,
    UseCasesAndScenarios,
    PricingAndAvailability,
    PageMetadata,
    Scripts,
    Stylesheets,
    InlineStyles,
}

impl Category {
    pub const ALL: [Category; 16] = [
        Category::AllTabsAndSections,
        Category::InteractiveElements,
        Category::ComprehensiveSpecifications,
        Category::MainContent,
        Category::GamingFeatures,
        Category::ModelComparisons,
        Category::ControlsAndInterface,
        Category::ConnectivityAndPorts,
        Category::TechnicalDetails,
        Category::AccessoriesAndPackaging,
        Category::UseCasesAndScenarios,
        Category::PricingAndAvailability,
        Category::PageMetadata,
        Category::Scripts,
        Category::Stylesheets,
        Category::InlineStyles,
    ];

    /// 记录 JSON 中的键名
    pub fn key(&self) -> &'static str {
        match self {
            Category::AllTabsAndSections => "all_tabs_and_sections",
            Category::InteractiveElements => "interactive_elements",
            Category::ComprehensiveSpecifications => "comprehensive_specifications",
            Category::MainContent => "main_content",
            Category::GamingFeatures => "gaming_features",
            Category::ModelComparisons => "model_comparisons",
            Category::ControlsAndInterface => "controls_and_interface",
            Category::ConnectivityAndPorts => "connectivity_and_ports",
            Category::TechnicalDetails => "technical_details",
            Category::AccessoriesAndPackaging => "accessories_and_packaging",
            Category::UseCasesAndScenarios => "use_cases_and_scenarios",
            Category::PricingAndAvailability => "pricing_and_availability",
            Category::PageMetadata => "page_metadata",
            Category::Scripts => "scripts",
            Category::Stylesheets => "stylesheets",
            Category::InlineStyles => "inline_styles",
        }
    }

    /// 摘要中显示的名称
    pub fn label(&self) -> &'static str {
        match self {
            Category::AllTabsAndSections => "All Tabs & Sections",
            Category::InteractiveElements => "Interactive Elements",
            Category::ComprehensiveSpecifications => "Comprehensive Specifications",
            Category::MainContent => "Main Content",
            Category::GamingFeatures => "Gaming Features",
            Category::ModelComparisons => "Model Comparisons",
            Category::ControlsAndInterface => "Controls & Interface",
            Category::ConnectivityAndPorts => "Connectivity & Ports",
            Category::TechnicalDetails => "Technical Details",
            Category::AccessoriesAndPackaging => "Accessories & Packaging",
            Category::UseCasesAndScenarios => "Use Cases & Scenarios",
            Category::PricingAndAvailability => "Pricing & Availability",
            Category::PageMetadata => "Page Metadata",
            Category::Scripts => "Scripts",
            Category::Stylesheets => "Stylesheets",
            Category::InlineStyles => "Inline Styles",
        }
    }
}

/// 一次抓取运行的结构化结果
///
/// 每个类别都是必填字段：序列化时无条件输出，反序列化时缺少任何类别都会失败。
/// 记录由提取器一次性构建，之后不再原地修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    pub url: String,
    pub timestamp: String,
    pub scraping_method: FetchMethod,

    pub all_tabs_and_sections: BTreeMap<String, SectionEntry>,
    pub interactive_elements: BTreeMap<String, InteractiveEntry>,
    pub comprehensive_specifications: BTreeMap<String, SpecEntry>,
    pub main_content: MainContent,

    pub gaming_features: KeywordPayload,
    pub model_comparisons: KeywordPayload,
    pub controls_and_interface: KeywordPayload,
    pub connectivity_and_ports: KeywordPayload,
    pub technical_details: KeywordPayload,
    pub accessories_and_packaging: KeywordPayload,
    pub use_cases_and_scenarios: KeywordPayload,
    pub pricing_and_availability: KeywordPayload,

    pub page_metadata: PageMetadata,

    pub scripts: Vec<String>,
    pub stylesheets: Vec<String>,
    pub inline_styles: Vec<String>,
}

impl ExtractedRecord {
    /// 类别中的条目数
    ///
    /// 映射类别按键计数；`main_content` 与 `page_metadata` 按字段计数
    pub fn item_count(&self, category: Category) -> usize {
        match category {
            Category::AllTabsAndSections => self.all_tabs_and_sections.len(),
            Category::InteractiveElements => self.interactive_elements.len(),
            Category::ComprehensiveSpecifications => self.comprehensive_specifications.len(),
            Category::MainContent => 4,
            Category::GamingFeatures => self.gaming_features.len(),
            Category::ModelComparisons => self.model_comparisons.len(),
            Category::ControlsAndInterface => self.controls_and_interface.len(),
            Category::ConnectivityAndPorts => self.connectivity_and_ports.len(),
            Category::TechnicalDetails => self.technical_details.len(),
            Category::AccessoriesAndPackaging => self.accessories_and_packaging.len(),
            Category::UseCasesAndScenarios => self.use_cases_and_scenarios.len(),
            Category::PricingAndAvailability => self.pricing_and_availability.len(),
            Category::PageMetadata => 5,
            Category::Scripts => self.scripts.len(),
            Category::Stylesheets => self.stylesheets.len(),
            Category::InlineStyles => self.inline_styles.len(),
        }
    }

    /// 所有类别条目数之和
    pub fn total_data_points(&self) -> usize {
        Category::ALL.iter().map(|c| self.item_count(*c)).sum()
    }

    /// 生成人类可读的运行摘要
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== PRODUCT PAGE DATA EXTRACTION SUMMARY ===");
        let _ = writeln!(out, "URL: {}", self.url);
        let _ = writeln!(out, "Timestamp: {}", self.timestamp);
        let _ = writeln!(out, "Scraping Method: {}", self.scraping_method);
        let _ = writeln!(out);
        let _ = writeln!(out, "DATA CATEGORIES EXTRACTED:");

        for (i, category) in Category::ALL.iter().enumerate() {
            if *category == Category::MainContent {
                let mc = &self.main_content;
                let _ = writeln!(
                    out,
                    "{}. {}: {} headings, {} paragraphs, {} images, {} sections",
                    i + 1,
                    category.label(),
                    mc.headings.len(),
                    mc.paragraphs.len(),
                    mc.images.len(),
                    mc.sections.len()
                );
            } else {
                let _ = writeln!(
                    out,
                    "{}. {}: {} items",
                    i + 1,
                    category.label(),
                    self.item_count(*category)
                );
            }
        }

        let _ = writeln!(out);
        let _ = write!(out, "TOTAL DATA POINTS: {}", self.total_data_points());
        out
    }
}
