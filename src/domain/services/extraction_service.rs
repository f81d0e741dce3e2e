// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::document::DocumentTree;
use crate::domain::models::fetch_result::FetchResult;
use crate::domain::models::record::ExtractedRecord;
use crate::domain::passes::{content, interactive, keywords, sections, specifications};
use crate::utils::errors::PipelineError;
use tracing::{debug, info};

/// 提取器
///
/// 对一棵文档树无条件运行所有提取阶段，把各阶段输出写入记录中对应的类别。
/// 阶段之间没有顺序依赖，也不相互去重。
#[derive(Debug, Default, Clone, Copy)]
pub struct Extractor;

impl Extractor {
    pub fn new() -> Self {
        Self
    }

    /// 解析获取结果并提取记录
    ///
    /// 只有 HTML 无法构成文档（空或仅空白）时失败
    pub fn extract(&self, url: &str, fetched: &FetchResult) -> Result<ExtractedRecord, PipelineError> {
        let doc = DocumentTree::parse(fetched.html()).ok_or_else(|| PipelineError::no_content(url))?;
        debug!("Parsed document of {} bytes", fetched.html().len());
        Ok(self.extract_document(url, fetched, &doc))
    }

    /// 在已解析的文档上运行所有提取阶段
    pub fn extract_document(
        &self,
        url: &str,
        fetched: &FetchResult,
        doc: &DocumentTree,
    ) -> ExtractedRecord {
        let record = ExtractedRecord {
            url: url.to_string(),
            timestamp: fetched.timestamp(),
            scraping_method: fetched.method(),

            all_tabs_and_sections: sections::extract_tabs_and_sections(doc),
            interactive_elements: interactive::extract_interactive_elements(doc),
            comprehensive_specifications: specifications::extract_comprehensive_specifications(doc),
            main_content: content::extract_main_content(doc),

            gaming_features: keywords::extract_gaming_features(doc),
            model_comparisons: keywords::extract_model_comparisons(doc),
            controls_and_interface: keywords::extract_controls_and_interface(doc),
            connectivity_and_ports: keywords::extract_connectivity_and_ports(doc),
            technical_details: keywords::extract_technical_details(doc),
            accessories_and_packaging: keywords::extract_accessories_and_packaging(doc),
            use_cases_and_scenarios: keywords::extract_use_cases_and_scenarios(doc),
            pricing_and_availability: keywords::extract_pricing_and_availability(doc),

            page_metadata: content::extract_page_metadata(doc),

            scripts: content::extract_scripts(doc),
            stylesheets: content::extract_stylesheets(doc),
            inline_styles: content::extract_inline_styles(doc),
        };

        info!(
            data_points = record.total_data_points(),
            "Extraction complete"
        );
        record
    }
}
