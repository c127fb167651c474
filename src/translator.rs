//! 翻译服务核心模块
//!
//! 逐段调用翻译API，失败时回退为原文，请求之间保持固定间隔。

use crate::error::{Result, TranslationError};
use crate::types::{Document, TranslateQuery, TranslationConfig};
use log::{debug, info, warn};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tokio::time::sleep;

/// 翻译服务主类
///
/// 每个文本片段发送一次 GET 请求，不合并、不重试。
/// 任何请求失败或响应异常都会回退为原文，处理继续进行。
///
/// # 示例
///
/// ```rust,no_run
/// use markup_translator::{TranslationService, TranslationConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let service = TranslationService::new(TranslationConfig::default())?;
///
///     let result = service.translate("Привет, мир!").await;
///     println!("Translation: {}", result);
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TranslationService {
    /// HTTP客户端，用于API调用
    client: Client,
    /// 翻译配置
    config: TranslationConfig,
}

impl TranslationService {
    /// 创建新的翻译服务实例
    ///
    /// HTTP客户端的超时时间取自 `config.timeout_secs`。
    pub fn new(config: TranslationConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("markup-translator/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &TranslationConfig {
        &self.config
    }

    /// 翻译单个文本片段
    ///
    /// 失败时返回原文。调用方无法区分“译文与原文相同”和“翻译失败”。
    pub async fn translate(&self, text: &str) -> String {
        match self.try_translate(text).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!("translation error: {}", e);
                text.to_string()
            }
        }
    }

    /// 翻译单个文本片段，返回具体的错误原因
    pub async fn try_translate(&self, text: &str) -> Result<String> {
        debug!(
            "GET {} ({} -> {}, {} chars)",
            self.config.api_url,
            self.config.source_lang,
            self.config.target_lang,
            text.chars().count()
        );

        let response = self
            .client
            .get(&self.config.api_url)
            .query(&TranslateQuery::new(&self.config, text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_string());
            return Err(TranslationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        parse_translation(&body)
    }

    /// 按顺序逐个翻译所有文本
    ///
    /// 每次请求后等待 `delay_between_requests_ms`，最后一次除外，无论成败。
    pub async fn translate_all(&self, texts: &[&str]) -> Vec<String> {
        let delay = Duration::from_millis(self.config.delay_between_requests_ms);
        let total = texts.len();
        let mut translated = Vec::with_capacity(total);

        for (i, text) in texts.iter().enumerate() {
            info!("translating part {}/{}...", i + 1, total);
            translated.push(self.translate(text).await);

            if i + 1 < total && !delay.is_zero() {
                sleep(delay).await;
            }
        }

        translated
    }

    /// 翻译文档中的所有文本片段，标签保持原样
    pub async fn translate_document(&self, document: Document) -> Result<Document> {
        let texts: Vec<&str> = document.text_segments().collect();
        let translations = self.translate_all(&texts).await;
        document.with_translations(translations)
    }
}

/// 从响应中提取译文
///
/// 响应形如 `[[["译文", "原文", ...], ...], ...]`，第一层数组中每个元素对应一个句子。
/// 所有句子的译文按顺序拼接。结果为空时视为解析失败。
pub fn parse_translation(body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| TranslationError::Parse(format!("invalid JSON response: {}", e)))?;

    let sentences = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::Parse("response has no sentence list".to_string()))?;

    let translated: String = sentences
        .iter()
        .filter_map(|sentence| sentence.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        Err(TranslationError::Parse("empty translation".to_string()))
    } else {
        Ok(translated)
    }
}
