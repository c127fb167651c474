//! 类型定义模块
//!
//! 定义翻译工具中使用的所有数据结构和配置类型。

use serde::{Deserialize, Serialize};

/// 翻译配置
///
/// 包含翻译服务的所有配置选项，如API地址、语言设置、请求间隔等。
///
/// # 字段说明
///
/// * `api_url` - 翻译API地址
/// * `client` - 请求中携带的 `client` 参数
/// * `source_lang` - 源语言代码
/// * `target_lang` - 目标语言代码，同时决定输出文件名后缀
/// * `delay_between_requests_ms` - 两次请求之间的固定间隔（毫秒）
/// * `timeout_secs` - 单次请求超时时间（秒）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// 翻译API地址
    pub api_url: String,
    /// 请求中携带的 `client` 参数
    pub client: String,
    /// 源语言代码
    pub source_lang: String,
    /// 目标语言代码
    pub target_lang: String,
    /// 两次请求之间的固定间隔（毫秒）
    pub delay_between_requests_ms: u64,
    /// 单次请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            api_url: "https://translate.googleapis.com/translate_a/single".to_string(),
            client: "gtx".to_string(),
            source_lang: "ru".to_string(),
            target_lang: "en".to_string(),
            delay_between_requests_ms: 1000,
            timeout_secs: 10,
        }
    }
}

/// 单次翻译请求的查询参数
#[derive(Debug, Serialize)]
pub struct TranslateQuery<'a> {
    pub client: &'a str,
    pub sl: &'a str,
    pub tl: &'a str,
    pub dt: &'a str,
    pub q: &'a str,
}

impl<'a> TranslateQuery<'a> {
    pub fn new(config: &'a TranslationConfig, text: &'a str) -> Self {
        Self {
            client: &config.client,
            sl: &config.source_lang,
            tl: &config.target_lang,
            dt: "t",
            q: text,
        }
    }
}

/// 文档片段：标签或可翻译文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub content: String,
    pub is_tag: bool,
}

impl Segment {
    pub fn tag(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_tag: true,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_tag: false,
        }
    }
}

/// 有序的片段序列
///
/// 翻译前拼接所有片段即得到原始输入（空白片段除外），
/// 翻译后拼接得到译文。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    segments: Vec<Segment>,
}

impl Document {
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// 将原始文本切分为文档，见 [`crate::segmenter::extract_segments`]。
    pub fn parse(content: &str) -> Self {
        Self::from_segments(crate::segmenter::extract_segments(content))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// 按原始顺序返回所有需要翻译的文本片段
    pub fn text_segments(&self) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .filter(|segment| !segment.is_tag)
            .map(|segment| segment.content.as_str())
    }

    pub fn text_segment_count(&self) -> usize {
        self.segments.iter().filter(|segment| !segment.is_tag).count()
    }

    /// 用译文替换文本片段，标签保持不变。
    pub fn with_translations(self, translations: Vec<String>) -> crate::Result<Self> {
        let segments = crate::reassembler::substitute(self.segments, translations)?;
        Ok(Self { segments })
    }

    pub fn render(&self) -> String {
        crate::reassembler::join(&self.segments)
    }
}
