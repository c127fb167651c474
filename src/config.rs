//! 配置管理模块
//!
//! 提供TOML配置文件的读取、写入和自动发现功能。

use crate::error::{Result, TranslationError};
use crate::types::TranslationConfig;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 默认搜索的配置文件位置，按顺序查找
pub const DEFAULT_CONFIG_LOCATIONS: [&str; 3] = [
    "translator-config.toml",
    "config.toml",
    ".translator-config.toml",
];

/// 翻译工具配置结构
///
/// 包含所有翻译相关的配置选项，支持从TOML文件加载和保存。
/// 文件中缺失的字段使用默认值。
///
/// # 示例
///
/// ```toml
/// [translation]
/// source_lang = "ru"
/// target_lang = "en"
/// delay_between_requests_ms = 1000
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationLibConfig {
    /// 翻译配置
    #[serde(default)]
    pub translation: TranslationConfig,
}

impl TranslationLibConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| TranslationError::io(path, e))?;
        toml::from_str(&content)
            .map_err(|e| TranslationError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| TranslationError::Config(e.to_string()))?;
        fs::write(path, content).map_err(|e| TranslationError::io(path, e))
    }

    /// Load configuration from the first default location that parses,
    /// falling back to built-in defaults
    pub fn load_from_default_locations() -> Self {
        Self::load_from_locations(Path::new("."), &DEFAULT_CONFIG_LOCATIONS)
    }

    fn load_from_locations(base: &Path, candidates: &[&str]) -> Self {
        for candidate in candidates {
            let path = base.join(candidate);
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    info!("Loaded configuration from: {}", path.display());
                    return config;
                }
                Err(e) => warn!("Failed to load config from {}: {}", path.display(), e),
            }
        }

        Self::default()
    }
}
