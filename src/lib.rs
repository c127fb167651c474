//! # Markup Translator
//!
//! 翻译 `.txt` 和 `.html` 文件中的文本，同时保持标签原样不动。
//!
//! ## 处理流程
//!
//! 1. **切分**: 按 `<...>` 标签边界把输入拆成标签片段和文本片段
//! 2. **翻译**: 逐个文本片段调用翻译API，请求之间保持固定间隔，失败时回退为原文
//! 3. **回填**: 译文放回原位置，按顺序拼接
//! 4. **写出**: 输出到输入文件旁的 `<文件名>_<目标语言><扩展名>`
//!
//! ## 快速开始
//!
//! ```rust,no_run
//! use markup_translator::{translate_file, TranslationConfig, TranslationService};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = TranslationService::new(TranslationConfig::default())?;
//!     let output = translate_file(Path::new("page.html"), &service).await?;
//!     println!("saved to {}", output.display());
//!     Ok(())
//! }
//! ```
//!
//! ## 配置文件支持
//!
//! ```toml
//! [translation]
//! api_url = "https://translate.googleapis.com/translate_a/single"
//! client = "gtx"
//! source_lang = "ru"
//! target_lang = "en"
//! delay_between_requests_ms = 1000
//! timeout_secs = 10
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod reassembler;
pub mod segmenter;
pub mod translator;
pub mod types;

pub use config::TranslationLibConfig;
pub use error::{Result, TranslationError};
pub use pipeline::{output_path_for, translate_file, validate_input};
pub use reassembler::reassemble;
pub use segmenter::extract_segments;
pub use translator::{parse_translation, TranslationService};
pub use types::{Document, Segment, TranslateQuery, TranslationConfig};
