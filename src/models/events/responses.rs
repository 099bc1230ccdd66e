use super::entities::Event;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 活动列表行（附带班级名；全校活动为空）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct EventListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub event: Event,
    pub class_name: Option<String>,
}

// 活动列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct EventListResponse {
    pub items: Vec<EventListItem>,
    pub pagination: PaginationInfo,
}
