//! 文件翻译流程
//!
//! 校验输入文件，切分、翻译、回填，并写出 `<文件名>_<目标语言><扩展名>`。

use crate::error::{Result, TranslationError};
use crate::translator::TranslationService;
use crate::types::Document;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// 支持的输入文件扩展名（不区分大小写）
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["txt", "html"];

/// 检查输入文件存在且扩展名受支持
pub fn validate_input(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(TranslationError::NotFound(path.to_path_buf()));
    }

    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false);

    if !supported {
        return Err(TranslationError::UnsupportedExtension(path.to_path_buf()));
    }

    Ok(())
}

/// 输出文件路径：与输入文件同目录，文件名后追加 `_<target_lang>`，扩展名不变
pub fn output_path_for(input: &Path, target_lang: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let mut file_name = format!("{}_{}", stem, target_lang);
    if let Some(ext) = input.extension() {
        file_name.push('.');
        file_name.push_str(&ext.to_string_lossy());
    }
    input.with_file_name(file_name)
}

/// 翻译整个文件并返回输出文件路径
///
/// 校验失败时不会创建输出文件。单个片段的翻译失败不会中断流程。
pub async fn translate_file(input: &Path, service: &TranslationService) -> Result<PathBuf> {
    validate_input(input)?;

    let content = fs::read_to_string(input).map_err(|e| TranslationError::io(input, e))?;
    info!("processing file: {}", input.display());

    let document = Document::parse(&content);
    info!("found {} parts to process", document.len());

    let translated = service.translate_document(document).await?;

    let output = output_path_for(input, &service.config().target_lang);
    fs::write(&output, translated.render()).map_err(|e| TranslationError::io(&output, e))?;
    info!("translation complete. output saved to: {}", output.display());

    Ok(output)
}
