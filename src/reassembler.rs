//! 译文回填模块
//!
//! 将译文按原始位置放回文本片段，并拼接为最终输出。

use crate::error::{Result, TranslationError};
use crate::types::Segment;

/// 用译文替换文本片段
///
/// `translations` 与文本片段按顺序一一对应，标签片段保持不变。
/// 数量不一致时返回 [`TranslationError::Alignment`]。
pub fn substitute(segments: Vec<Segment>, translations: Vec<String>) -> Result<Vec<Segment>> {
    let expected = segments.iter().filter(|segment| !segment.is_tag).count();
    if expected != translations.len() {
        return Err(TranslationError::Alignment {
            expected,
            actual: translations.len(),
        });
    }

    let mut translations = translations.into_iter();
    Ok(segments
        .into_iter()
        .map(|segment| {
            if segment.is_tag {
                segment
            } else {
                // counts checked above
                Segment::text(translations.next().unwrap_or_default())
            }
        })
        .collect())
}

/// 按原始顺序拼接所有片段
pub fn join(segments: &[Segment]) -> String {
    segments.iter().map(|segment| segment.content.as_str()).collect()
}

/// 回填译文并拼接为最终文本
pub fn reassemble(segments: &[Segment], translations: &[String]) -> Result<String> {
    let segments = substitute(segments.to_vec(), translations.to_vec())?;
    Ok(join(&segments))
}
