use serde::Deserialize;
use ts_rs::TS;

// 公告创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub description: String,
    pub date: chrono::DateTime<chrono::Utc>,
    pub class_id: Option<i64>,
}

// 公告更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct UpdateAnnouncementRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<chrono::DateTime<chrono::Utc>>,
    pub class_id: Option<i64>,
}
