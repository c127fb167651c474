//! 错误处理模块
//!
//! 定义翻译工具中使用的错误类型和错误处理机制。

use std::path::PathBuf;
use thiserror::Error;

/// 翻译错误类型
///
/// 包含翻译过程中可能出现的各种错误情况。
///
/// # 变体说明
///
/// * `Http` - HTTP请求错误（连接失败、超时等）
/// * `Api` - API返回了非成功状态码
/// * `Parse` - 响应内容无法解析为翻译结果
/// * `Io` - 读写文件失败
/// * `NotFound` - 输入文件不存在
/// * `UnsupportedExtension` - 输入文件扩展名不是 `.txt` 或 `.html`
/// * `Alignment` - 译文数量与文本片段数量不一致
/// * `Config` - 配置文件错误
#[derive(Debug, Error)]
pub enum TranslationError {
    /// HTTP请求错误
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// API响应错误
    #[error("API request failed with status {status}: {message}")]
    Api {
        /// HTTP状态码
        status: u16,
        /// 错误消息
        message: String,
    },
    /// 解析错误
    #[error("Parse error: {0}")]
    Parse(String),
    /// 文件读写错误
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("input file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("input file must be a .txt or .html file: {}", .0.display())]
    UnsupportedExtension(PathBuf),
    /// 译文与文本片段无法一一对应
    #[error("expected {expected} translated segments, got {actual}")]
    Alignment { expected: usize, actual: usize },
    #[error("Config error: {0}")]
    Config(String),
}

impl TranslationError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TranslationError::Io {
            path: path.into(),
            source,
        }
    }
}

/// 翻译结果类型别名
///
/// 简化返回类型，使用 `TranslationError` 作为错误类型。
///
/// # 示例
///
/// ```rust
/// use markup_translator::{Result, TranslationError};
///
/// fn example_function() -> Result<String> {
///     Err(TranslationError::Parse("empty payload".to_string()))
/// }
///
/// assert!(example_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, TranslationError>;
