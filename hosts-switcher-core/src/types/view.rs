//! 提供给渲染层的只读快照

use serde::Serialize;

use super::{HostsEntry, HostsId, LangTable};

/// 渲染层所需的全部状态
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct HostsView {
    /// 用户的 hosts 列表
    pub list: Vec<HostsEntry>,
    /// 系统 hosts
    pub sys_hosts: HostsEntry,
    /// 当前 hosts
    pub current: HostsEntry,
    /// 当前 hosts 是否只读
    pub read_only: bool,
    /// 语言包
    pub lang: LangTable,
    /// 刚添加的条目（高亮用）
    pub just_added_id: Option<HostsId>,
    /// 是否正在拖拽
    pub is_dragging: bool,
}
