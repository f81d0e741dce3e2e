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

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 默认目标页面
pub const DEFAULT_TARGET_URL: &str = "https://www.xbox.com/en-AU/handhelds/rog-xbox-ally";

/// 浏览器风格的 User-Agent，目标站点会拒绝或降级未识别的客户端
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// 应用程序配置设置
///
/// 包含目标页面、浏览器渲染、HTTP 回退和存储等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 抓取目标配置
    pub scraper: ScraperSettings,
    /// 浏览器渲染配置
    pub browser: BrowserSettings,
    /// HTTP 回退配置
    pub http: HttpSettings,
    /// 存储配置
    pub storage: StorageSettings,
}

/// 抓取目标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperSettings {
    /// 目标页面URL
    pub target_url: String,
    /// 请求使用的 User-Agent
    pub user_agent: String,
}

/// 浏览器渲染配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserSettings {
    /// 是否启用无头浏览器渲染
    pub enabled: bool,
    /// 页面就绪等待超时（秒）
    pub render_timeout_secs: u64,
    /// 就绪后额外等待客户端渲染的时间（秒）
    pub settle_delay_secs: u64,
    /// 视口宽度
    pub window_width: u32,
    /// 视口高度
    pub window_height: u32,
    /// 远程 Chrome 调试地址，设置后不再本地启动浏览器
    pub remote_debugging_url: Option<String>,
}

impl BrowserSettings {
    pub fn render_timeout(&self) -> Duration {
        Duration::from_secs(self.render_timeout_secs)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_secs(self.settle_delay_secs)
    }
}

/// HTTP 回退配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// 最大尝试次数
    pub max_attempts: u32,
    /// 单次请求超时（秒）
    pub timeout_secs: u64,
    /// 初始退避时间（毫秒），第 k 次失败后等待 initial * 2^k
    pub initial_backoff_ms: u64,
}

impl HttpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn initial_backoff(&self) -> Duration {
        Duration::from_millis(self.initial_backoff_ms)
    }
}

/// 存储配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// 结果 JSON 文件路径
    pub output_path: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加代码默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和
    /// `SPECSCRAPE__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let mut builder = Self::defaults_builder()?
            .add_source(File::with_name("config/default").required(false));
        if let Some(name) = environment_layer(&env) {
            builder = builder.add_source(File::with_name(&name).required(false));
        }
        builder
            .add_source(Environment::with_prefix("SPECSCRAPE").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 仅使用代码内默认值构建配置，不读取文件和环境变量
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::defaults_builder()?.build()?.try_deserialize()
    }

    fn defaults_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("scraper.target_url", DEFAULT_TARGET_URL)?
            .set_default("scraper.user_agent", DEFAULT_USER_AGENT)?
            // Browser rendering
            .set_default("browser.enabled", true)?
            .set_default("browser.render_timeout_secs", 20)?
            .set_default("browser.settle_delay_secs", 5)?
            .set_default("browser.window_width", 1920)?
            .set_default("browser.window_height", 1080)?
            // HTTP fallback
            .set_default("http.max_attempts", 3)?
            .set_default("http.timeout_secs", 30)?
            .set_default("http.initial_backoff_ms", 1000)?
            // Storage
            .set_default("storage.output_path", "xbox_rog_ally_complete_data.json")
    }
}

/// `APP_ENVIRONMENT` 对应的配置文件；`default` 已作为基础层加载，不再重复叠加
pub(crate) fn environment_layer(env: &str) -> Option<String> {
    (env != "default").then(|| format!("config/{}", env))
}
