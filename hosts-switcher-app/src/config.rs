//! 应用配置
//!
//! 使用 JSON 文件存储 coordinator 的计时参数。文件不存在时使用默认值。

use std::path::{Path, PathBuf};
use std::time::Duration;

use hosts_switcher_core::config::{
    DEFAULT_AGENT_TIMEOUT, DEFAULT_LANGUAGE, DEFAULT_NOTIFICATION_AUTO_DISMISS,
    DEFAULT_REMOTE_REFRESH_INTERVAL, DEFAULT_SAVE_DEBOUNCE,
};
use hosts_switcher_core::{CoordinatorConfig, CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use tokio::fs;

/// 获取配置目录路径
fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hosts-switcher")
}

/// 默认配置文件路径
#[must_use]
pub fn default_config_path() -> PathBuf {
    get_config_dir().join("config.json")
}

/// 磁盘上的配置（毫秒为单位）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub save_debounce_ms: u64,
    /// 连续编辑时强制保存的上限，`None` 表示不限制
    pub max_save_latency_ms: Option<u64>,
    pub remote_refresh_interval_ms: u64,
    pub agent_timeout_ms: u64,
    pub notification_auto_dismiss_ms: u64,
    pub default_language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            save_debounce_ms: millis(DEFAULT_SAVE_DEBOUNCE),
            max_save_latency_ms: None,
            remote_refresh_interval_ms: millis(DEFAULT_REMOTE_REFRESH_INTERVAL),
            agent_timeout_ms: millis(DEFAULT_AGENT_TIMEOUT),
            notification_auto_dismiss_ms: millis(DEFAULT_NOTIFICATION_AUTO_DISMISS),
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl AppConfig {
    /// 从默认路径加载
    pub async fn load_default() -> CoreResult<Self> {
        Self::load(&default_config_path()).await
    }

    /// 从文件加载，文件不存在时返回默认配置
    pub async fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        let config: Self = serde_json::from_str(&content)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// 保存到文件，必要时创建父目录
    pub async fn save(&self, path: &Path) -> CoreResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| CoreError::StorageError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        fs::write(path, content)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))
    }

    /// 转换为 coordinator 配置并校验
    pub fn to_coordinator_config(&self) -> CoreResult<CoordinatorConfig> {
        let config = CoordinatorConfig {
            save_debounce: Duration::from_millis(self.save_debounce_ms),
            max_save_latency: self.max_save_latency_ms.map(Duration::from_millis),
            remote_refresh_interval: Duration::from_millis(self.remote_refresh_interval_ms),
            agent_timeout: Duration::from_millis(self.agent_timeout_ms),
            notification_auto_dismiss: Duration::from_millis(self.notification_auto_dismiss_ms),
            default_language: self.default_language.clone(),
        };
        config.validate()?;
        Ok(config)
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_coordinator_defaults() {
        let config = AppConfig::default().to_coordinator_config().unwrap();
        assert_eq!(config, CoordinatorConfig::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"saveDebounceMs": 250, "maxSaveLatencyMs": 5000}"#).unwrap();

        assert_eq!(config.save_debounce_ms, 250);
        assert_eq!(config.max_save_latency_ms, Some(5000));
        assert_eq!(config.remote_refresh_interval_ms, 60_000);
        assert_eq!(config.default_language, "en");
    }

    #[test]
    fn invalid_values_are_rejected() {
        let config = AppConfig {
            remote_refresh_interval_ms: 0,
            ..AppConfig::default()
        };
        assert!(matches!(
            config.to_coordinator_config(),
            Err(CoreError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&tmp.path().join("absent.json")).await.unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[tokio::test]
    async fn save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("config.json");
        let config = AppConfig {
            agent_timeout_ms: 5000,
            default_language: "cn".to_string(),
            ..AppConfig::default()
        };

        config.save(&path).await.unwrap();

        assert_eq!(AppConfig::load(&path).await.unwrap(), config);
    }

    #[tokio::test]
    async fn malformed_file_is_a_serialization_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            AppConfig::load(&path).await,
            Err(CoreError::SerializationError(_))
        ));
    }
}
