//! Hosts 条目相关类型定义

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Hosts 条目 ID
///
/// 由 Agent 创建时分配，可能是字符串也可能是数字，序列化时保留原始形式。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HostsId {
    /// 数字 ID
    Number(i64),
    /// 字符串 ID
    Text(String),
}

impl HostsId {
    /// 是否为空 ID（系统 hosts 可能没有 ID）
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl Default for HostsId {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for HostsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for HostsId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for HostsId {
    fn from(n: i32) -> Self {
        Self::Number(i64::from(n))
    }
}

impl From<&str> for HostsId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for HostsId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// 条目来源（`where` 字段）
///
/// 未知的来源标签原样保留，避免保存整个列表时丢失数据。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HostsWhere {
    /// 本地条目，可编辑
    #[default]
    Local,
    /// 远程条目，内容由远程地址刷新
    Remote,
    /// 分组条目，内容由其他条目组合而成
    Group,
    /// 文件夹
    Folder,
    /// 其他未知来源
    Other(String),
}

impl HostsWhere {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
            Self::Group => "group",
            Self::Folder => "folder",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for HostsWhere {
    fn from(s: String) -> Self {
        match s.as_str() {
            "local" => Self::Local,
            "remote" => Self::Remote,
            "group" => Self::Group,
            "folder" => Self::Folder,
            _ => Self::Other(s),
        }
    }
}

impl From<HostsWhere> for String {
    fn from(w: HostsWhere) -> Self {
        match w {
            HostsWhere::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for HostsWhere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hosts 条目
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HostsEntry {
    /// 条目 ID
    #[serde(default, skip_serializing_if = "HostsId::is_empty")]
    pub id: HostsId,
    /// hosts 规则文本
    #[serde(default)]
    pub content: String,
    /// 条目来源
    #[serde(default, rename = "where")]
    pub provenance: HostsWhere,
    /// 是否为系统 hosts
    #[serde(default)]
    pub is_sys: bool,
    /// Agent 附带的其他字段（title、url、on 等），原样透传
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HostsEntry {
    /// 创建本地条目
    #[must_use]
    pub fn local(id: impl Into<HostsId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    /// 创建指定来源的条目
    #[must_use]
    pub fn with_provenance(
        id: impl Into<HostsId>,
        content: impl Into<String>,
        provenance: HostsWhere,
    ) -> Self {
        Self {
            provenance,
            ..Self::local(id, content)
        }
    }

    /// 创建系统 hosts 条目
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_sys: true,
            ..Self::default()
        }
    }

    /// 标题（Agent 透传字段）
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.extra.get("title").and_then(Value::as_str)
    }

    /// 是否只读，见 [`crate::services::is_read_only`]
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        crate::services::is_read_only(Some(self))
    }
}

/// `getHosts` 的响应
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HostsState {
    /// 用户的 hosts 列表
    #[serde(default)]
    pub list: Vec<HostsEntry>,
    /// 系统 hosts
    #[serde(default = "default_sys_hosts")]
    pub sys_hosts: HostsEntry,
}

fn default_sys_hosts() -> HostsEntry {
    HostsEntry::system("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_defaults_missing_fields() {
        let entry: HostsEntry = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(entry.id, HostsId::Number(1));
        assert_eq!(entry.content, "");
        assert_eq!(entry.provenance, HostsWhere::Local);
        assert!(!entry.is_sys);
    }

    #[test]
    fn entry_keeps_unknown_fields() {
        let json = r#"{"id":"abc","title":"dev","on":true,"where":"remote","url":"http://x"}"#;
        let entry: HostsEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, HostsId::from("abc"));
        assert_eq!(entry.provenance, HostsWhere::Remote);
        assert_eq!(entry.title(), Some("dev"));

        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back["on"], true);
        assert_eq!(back["url"], "http://x");
        assert_eq!(back["where"], "remote");
    }

    #[test]
    fn unknown_where_is_preserved() {
        let entry: HostsEntry = serde_json::from_str(r#"{"id":2,"where":"cloud"}"#).unwrap();
        assert_eq!(entry.provenance, HostsWhere::Other("cloud".to_string()));
        assert_eq!(serde_json::to_value(&entry).unwrap()["where"], "cloud");
    }

    #[test]
    fn system_entry_without_id() {
        let state: HostsState =
            serde_json::from_str(r#"{"list":[],"sys_hosts":{"is_sys":true,"content":"127.0.0.1 localhost"}}"#)
                .unwrap();
        assert!(state.sys_hosts.is_sys);
        assert!(state.sys_hosts.id.is_empty());
        let back = serde_json::to_value(&state.sys_hosts).unwrap();
        assert!(back.get("id").is_none());
    }
}
