//! 偏好设置与语言包类型定义

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `getPref` 的响应
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// 用户选择的界面语言
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_language: Option<String>,
    /// 其他偏好项，原样透传
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Preferences {
    /// 实际使用的语言代码（未设置或为空时使用 `fallback`）
    #[must_use]
    pub fn language_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.user_language.as_deref() {
            Some(lang) if !lang.trim().is_empty() => lang,
            _ => fallback,
        }
    }
}

/// 语言包（`getLang` 的响应），对核心层不透明
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LangTable(pub Map<String, Value>);

impl LangTable {
    /// 查找文案，找不到时返回 key 本身
    #[must_use]
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.0.get(key).and_then(Value::as_str).unwrap_or(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_falls_back_when_missing_or_blank() {
        let pref = Preferences::default();
        assert_eq!(pref.language_or("en"), "en");

        let pref: Preferences = serde_json::from_str(r#"{"user_language":"  "}"#).unwrap();
        assert_eq!(pref.language_or("en"), "en");

        let pref: Preferences =
            serde_json::from_str(r#"{"user_language":"cn","auto_launch":true}"#).unwrap();
        assert_eq!(pref.language_or("en"), "cn");
        assert_eq!(pref.extra["auto_launch"], true);
    }

    #[test]
    fn lang_table_lookup() {
        let lang: LangTable = serde_json::from_str(r#"{"system_hosts":"System Hosts"}"#).unwrap();
        assert_eq!(lang.text("system_hosts"), "System Hosts");
        assert_eq!(lang.text("missing"), "missing");
    }
}
