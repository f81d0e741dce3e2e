// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用用例模块
///
/// - 产品页抓取（scrape_product）：获取 → 提取 → 保存
pub mod scrape_product;
