use super::entities::Parent;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 家长列表行（附带名下学生姓名）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/parent.ts")]
pub struct ParentListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub parent: Parent,
    pub students: Vec<String>,
}

// 家长列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/parent.ts")]
pub struct ParentListResponse {
    pub items: Vec<ParentListItem>,
    pub pagination: PaginationInfo,
}
