use super::entities::Announcement;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 公告列表行（附带班级名；全校公告为空）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct AnnouncementListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub announcement: Announcement,
    pub class_name: Option<String>,
}

// 公告列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct AnnouncementListResponse {
    pub items: Vec<AnnouncementListItem>,
    pub pagination: PaginationInfo,
}
