// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;
use specscrape::application::usecases::scrape_product::ScrapeProductUseCase;
use specscrape::config::settings::Settings;
use specscrape::engines::fetcher::Fetcher;
use specscrape::infrastructure::storage::LocalJsonStorage;
use specscrape::utils::telemetry;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};

/// 产品页抓取命令行
#[derive(Parser, Debug)]
#[command(name = "specscrape", version, about)]
struct Cli {
    /// 目标页面URL（覆盖 scraper.target_url）
    #[arg(long)]
    url: Option<String>,

    /// 结果 JSON 文件路径（覆盖 storage.output_path）
    #[arg(long)]
    output: Option<String>,

    /// 不使用无头浏览器，只走纯 HTTP
    #[arg(long)]
    no_browser: bool,

    /// 以 JSON 格式输出日志
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn apply(self, settings: &mut Settings) {
        if let Some(url) = self.url {
            settings.scraper.target_url = url;
        }
        if let Some(output) = self.output {
            settings.storage.output_path = output;
        }
        if self.no_browser {
            settings.browser.enabled = false;
        }
    }
}

/// 主函数
///
/// 加载配置，执行一次抓取运行并打印摘要。没有获取到内容时以非零状态退出。
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // 1. Initialize logging
    telemetry::init_telemetry(cli.json_logs);
    info!("Starting specscrape...");

    // 2. Load configuration
    let mut settings = Settings::new()?;
    cli.apply(&mut settings);
    info!("Configuration loaded");

    // 3. Wire engines and storage
    let fetcher = Arc::new(Fetcher::from_settings(&settings)?);
    let storage = Arc::new(LocalJsonStorage::from_settings(&settings.storage));
    let use_case = ScrapeProductUseCase::new(fetcher, storage.clone());

    // 4. Run
    let outcome = match use_case.execute(&settings.scraper.target_url).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Scrape run failed: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("{}", outcome.record.summary());

    if outcome.persisted {
        info!("Data saved to {}", storage.path().display());
        Ok(ExitCode::SUCCESS)
    } else {
        warn!("Record was extracted but could not be saved");
        Ok(ExitCode::from(2))
    }
}
