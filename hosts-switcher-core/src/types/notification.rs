//! 通知类型定义

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Agent 上报的错误（`err` 事件）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentErrorReport {
    /// 标题
    #[serde(default)]
    pub title: String,
    /// 详细内容
    #[serde(default)]
    pub content: String,
}

impl AgentErrorReport {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// 通知显示位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NotificationPosition {
    /// 右上角
    #[default]
    #[serde(rename = "tr")]
    TopRight,
    /// 右下角
    #[serde(rename = "br")]
    BottomRight,
}

/// 交给显示层的通知
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub level: NotificationLevel,
    pub position: NotificationPosition,
    /// 自动消失时间
    pub auto_dismiss: Duration,
    pub raised_at: DateTime<Utc>,
}
