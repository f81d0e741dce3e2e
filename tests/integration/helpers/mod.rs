// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use specscrape::config::settings::Settings;
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 一个接近真实产品页结构的样例
pub const PRODUCT_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en-AU">
<head>
  <title>ROG Xbox Ally | Xbox</title>
  <meta name="description" content="Play your Xbox games on a handheld built for Windows.">
  <meta name="keywords" content="xbox, handheld, rog">
  <link rel="canonical" href="https://www.xbox.com/en-AU/handhelds/rog-xbox-ally">
  <link rel="stylesheet" href="/css/site.css">
  <style>.hero { color: #107c10 }</style>
  <script src="/js/bundle.js"></script>
</head>
<body>
  <h1>ROG Xbox Ally</h1>
  <div class="pivot-tabs">
    <button role="tab" id="tab-ally">ROG Xbox Ally</button>
    <button role="tab" id="tab-ally-x">ROG Xbox Ally X</button>
  </div>
  <section id="features" class="feature-section">
    <p>Access hundreds of high-quality games with Xbox Game Pass Ultimate.</p>
    <p>Use Remote Play to stream games from your console anywhere you go.</p>
    <p>Compare ROG Xbox Ally and ROG Xbox Ally X to find the right fit.</p>
  </section>
  <table class="spec-table">
    <tr><th>Processor</th><td>AMD Ryzen Z2 A</td></tr>
    <tr><th>Memory</th><td>16GB LPDDR5X-6400</td></tr>
    <tr><td></td><td></td></tr>
  </table>
  <dl>
    <dt>Display</dt><dd>7" FHD (1080p) IPS, 120Hz refresh rate</dd>
    <dt>Weight</dt><dd>670g</dd>
    <dt>Battery</dt>
  </dl>
  <ul class="tech-specs">
    <li>Connectivity: WiFi 6E and Bluetooth 5.4</li>
    <li>Two USB Type-C ports</li>
  </ul>
  <div class="accordion" aria-expanded="false" id="faq">What's included in the box?</div>
  <p>Available at participating retailers, check the price in your region today.</p>
  <button id="buy-now" onclick="buy()">Buy now</button>
  <a href="/compare" class="link">Compare models</a>
  <form action="/newsletter" method="post">
    <input type="email" name="email" placeholder="Email address">
  </form>
  <img src="/img/ally.png" alt="ROG Xbox Ally">
  <script>window.__STATE__ = {"price": 999};</script>
</body>
</html>"#;

/// 测试配置：关闭浏览器，退避缩短到毫秒级，输出写入给定路径
pub fn test_settings(output: &Path) -> Settings {
    let mut settings = Settings::with_defaults().unwrap();
    settings.browser.enabled = false;
    settings.http.initial_backoff_ms = 10;
    settings.http.timeout_secs = 5;
    settings.storage.output_path = output.to_string_lossy().into_owned();
    settings
}

/// 启动返回样例页面的模拟服务器
pub async fn serve_page(route: &str, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(body),
        )
        .mount(&server)
        .await;
    server
}
