// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 各提取阶段使用的固定选择器、正则和关键词表。
//! 列表顺序即处理顺序，决定了"后匹配覆盖先匹配"的结果。

/// 标签页类结构选择器
pub const TAB_SELECTORS: [&str; 6] = [
    r#"[role="tab"]"#,
    r#"[class*="tab"]"#,
    r#"[class*="pivot"]"#,
    r#"[class*="section"]"#,
    r#"[class*="accordion"]"#,
    r#"[class*="collapse"]"#,
];

/// 可展开/折叠内容选择器
pub const EXPANDABLE_SELECTORS: [&str; 5] = [
    r#"[class*="expand"]"#,
    r#"[class*="collapse"]"#,
    r#"[class*="accordion"]"#,
    "[aria-expanded]",
    "[data-toggle]",
];

/// 结构化规格列表的类名模式
pub const STRUCTURED_LIST_CLASS_PATTERN: &str = r"spec|specification|tech|technical|feature";

/// 硬件/显示/连接规格正则，按顺序应用，大小写不敏感
pub const SPEC_PATTERNS: [&str; 18] = [
    r"AMD Ryzen[^.]*",
    r"\d+GB\s+(?:LPDDR5X?|RAM)[^.]*",
    r"\d+TB\s+(?:M\.2|SSD)[^.]*",
    r#"\d+\.?\d*["\']?\s*(?:inch|")[^.]*"#,
    r"\d+p\s+(?:FHD|resolution)[^.]*",
    r"\d+Hz\s+(?:refresh|frequency)[^.]*",
    r"\d+Wh\s+(?:battery|power)[^.]*",
    r"WiFi\s+\d+[^.]*",
    r"Bluetooth\s+\d+\.?\d*[^.]*",
    r"USB\s+\d+[^.]*",
    r"Thunderbolt\s+\d+[^.]*",
    r"DisplayPort\s+\d+\.?\d*[^.]*",
    r"Gorilla Glass[^.]*",
    r"Corning[^.]*",
    r"FreeSync[^.]*",
    r"IPS[^.]*",
    r"FHD[^.]*",
    r"1080p[^.]*",
];

/// 型号对比文本模式
pub const COMPARISON_PATTERN: &str = r"Ally X|Ally X vs|vs Ally|difference|compare";

pub const GAMING_KEYWORDS: [&str; 8] = [
    "Game Pass",
    "Cloud Gaming",
    "Play Anywhere",
    "Remote Play",
    "Xbox",
    "Gaming",
    "Stream",
    "Library",
];

pub const CONTROL_KEYWORDS: [&str; 6] = [
    "controls",
    "buttons",
    "triggers",
    "grips",
    "Xbox button",
    "Game Bar",
];

pub const CONNECTIVITY_KEYWORDS: [&str; 7] = [
    "USB",
    "WiFi",
    "Bluetooth",
    "microSD",
    "audio",
    "port",
    "connectivity",
];

pub const TECHNICAL_KEYWORDS: [&str; 9] = [
    "120Hz",
    "refresh rate",
    "FreeSync",
    "brightness",
    "Gorilla Glass",
    "anti-reflection",
    "IPS",
    "FHD",
    "1080p",
];

pub const ACCESSORY_KEYWORDS: [&str; 6] = [
    "included",
    "accessories",
    "stand",
    "charger",
    "65W",
    "packaging",
];

pub const USE_CASE_KEYWORDS: [&str; 7] = [
    "portable", "travel", "home", "gaming", "use", "scenario", "when",
];

pub const PRICING_KEYWORDS: [&str; 6] = [
    "price",
    "cost",
    "buy",
    "purchase",
    "available",
    "retailer",
];
