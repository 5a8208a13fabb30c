//! Agent 事件类型定义
//!
//! 入站事件为 [`AgentSignal`]，出站事件为 [`AgentEvent`]。

use serde::{Deserialize, Serialize};

use super::{AgentErrorReport, HostsEntry};

/// 发往 Agent 的事件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum AgentEvent {
    /// 持久化整个列表
    Save(Vec<HostsEntry>),
    /// 列表已更新（远程刷新结果）
    ListUpdated(Vec<HostsEntry>),
    /// 用户按下 Esc
    Esc,
    /// 拖拽结束（窗口级鼠标释放）
    DragEnd,
}

impl AgentEvent {
    /// 事件名（与 Agent 约定的通道名一致）
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Save(_) => "save",
            Self::ListUpdated(_) => "list_updated",
            Self::Esc => "esc",
            Self::DragEnd => "drag_end",
        }
    }
}

/// 来自 Agent 的事件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum AgentSignal {
    DragStart,
    DragEnd,
    /// 需要展示给用户的错误
    Err(AgentErrorReport),
    /// Agent 主动推送的新列表
    ListUpdated(Vec<HostsEntry>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_wire_format() {
        let sig: AgentSignal =
            serde_json::from_str(r#"{"event":"err","data":{"title":"t","content":"c"}}"#).unwrap();
        assert_eq!(sig, AgentSignal::Err(AgentErrorReport::new("t", "c")));

        let sig: AgentSignal = serde_json::from_str(r#"{"event":"drag_start"}"#).unwrap();
        assert_eq!(sig, AgentSignal::DragStart);
    }

    #[test]
    fn event_names() {
        assert_eq!(AgentEvent::Save(Vec::new()).name(), "save");
        assert_eq!(AgentEvent::DragEnd.name(), "drag_end");
        let json = serde_json::to_value(AgentEvent::Esc).unwrap();
        assert_eq!(json["event"], "esc");
    }
}
