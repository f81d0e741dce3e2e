// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{BrowserSettings, ScraperSettings};
use crate::engines::traits::{EngineError, ScraperEngine};
use async_trait::async_trait;
use chromiumoxide::error::CdpError;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// 等待 body 出现时的轮询间隔
const READINESS_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// 一次渲染期间持有的浏览器会话
///
/// 启动的 Chrome 进程在 `close` 时关闭并回收；连接的远程实例只断开，不关闭。
/// 事件处理任务在会话结束（包括提前返回或 panic）时中止。
struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
    owned: bool,
}

impl BrowserSession {
    async fn open(settings: &BrowserSettings) -> Result<Self, EngineError> {
        let owned = settings.remote_debugging_url.is_none();

        let (browser, mut handler) = if let Some(ref url) = settings.remote_debugging_url {
            info!("Connecting to remote Chrome instance at: {}", url);
            Browser::connect(url)
                .await
                .map_err(|e| EngineError::Browser(format!("Failed to connect to remote Chrome: {}", e)))?
        } else {
            let config = BrowserConfig::builder()
                .no_sandbox()
                .window_size(settings.window_width, settings.window_height)
                .request_timeout(settings.render_timeout())
                .arg("--disable-gpu")
                .arg("--disable-dev-shm-usage")
                .build()
                .map_err(EngineError::Browser)?;

            Browser::launch(config)
                .await
                .map_err(|e| EngineError::Browser(format!("Failed to launch Chrome: {}", e)))?
        };

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            browser,
            handler,
            owned,
        })
    }

    async fn close(&mut self) {
        if !self.owned {
            return;
        }
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Failed to reap browser process: {}", e);
        }
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.handler.abort();
    }
}

/// 无头浏览器渲染引擎
///
/// 基于chromiumoxide。每次调用获取独立的浏览器会话，调用结束时无条件释放。
pub struct BrowserEngine {
    settings: BrowserSettings,
    user_agent: String,
}

impl BrowserEngine {
    pub fn new(scraper: &ScraperSettings, settings: &BrowserSettings) -> Self {
        Self {
            settings: settings.clone(),
            user_agent: scraper.user_agent.clone(),
        }
    }

    /// 导航并等待页面就绪
    ///
    /// 就绪后再额外等待固定的渲染时间；导航或等待超时则跳过渲染等待，直接返回当前 DOM
    async fn render(&self, page: &Page, url: &str) -> Result<String, EngineError> {
        page.set_user_agent(self.user_agent.as_str())
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?;

        info!("Loading page with headless browser: {}", url);
        let render_timeout = self.settings.render_timeout();
        let navigation = async {
            page.goto(url).await?;
            wait_for_body(page).await;
            Ok::<(), CdpError>(())
        };

        match await_readiness(navigation, render_timeout).await? {
            Readiness::Ready => {
                debug!(
                    "Page ready, waiting {:?} for client-side rendering",
                    self.settings.settle_delay()
                );
                tokio::time::sleep(self.settings.settle_delay()).await;
            }
            Readiness::TimedOut => {
                warn!(
                    "Page readiness timed out after {:?}, using partial content",
                    render_timeout
                );
            }
        }

        page.content()
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))
    }
}

/// 导航的就绪结果
#[derive(Debug, PartialEq, Eq)]
enum Readiness {
    Ready,
    TimedOut,
}

/// 在 `limit` 内等待导航完成
///
/// CDP 请求超时与整体超时都视为部分就绪；其他导航错误原样上报
async fn await_readiness<F>(navigation: F, limit: Duration) -> Result<Readiness, EngineError>
where
    F: Future<Output = Result<(), CdpError>>,
{
    match tokio::time::timeout(limit, navigation).await {
        Ok(Ok(())) => Ok(Readiness::Ready),
        Ok(Err(CdpError::Timeout)) | Err(_) => Ok(Readiness::TimedOut),
        Ok(Err(e)) => Err(EngineError::Browser(format!("Navigation failed: {}", e))),
    }
}

async fn wait_for_body(page: &Page) {
    while page.find_element("body").await.is_err() {
        tokio::time::sleep(READINESS_POLL_INTERVAL).await;
    }
}

#[async_trait]
impl ScraperEngine for BrowserEngine {
    async fn scrape(&self, url: &str) -> Result<String, EngineError> {
        let mut session = BrowserSession::open(&self.settings).await?;

        let result = match session.browser.new_page("about:blank").await {
            Ok(page) => {
                let rendered = self.render(&page, url).await;
                if let Err(e) = page.close().await {
                    debug!("Failed to close page: {}", e);
                }
                rendered
            }
            Err(e) => Err(EngineError::Browser(e.to_string())),
        };

        session.close().await;

        let html = result?;
        if html.trim().is_empty() {
            return Err(EngineError::EmptyContent);
        }
        Ok(html)
    }

    fn name(&self) -> &'static str {
        "chromium"
    }
}
