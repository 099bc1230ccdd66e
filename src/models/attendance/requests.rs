use serde::Deserialize;
use ts_rs::TS;

// 出勤记录创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct CreateAttendanceRequest {
    pub date: chrono::DateTime<chrono::Utc>,
    pub present: bool,
    pub student_id: i64,
    pub lesson_id: i64,
}

// 出勤记录更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct UpdateAttendanceRequest {
    pub date: Option<chrono::DateTime<chrono::Utc>>,
    pub present: Option<bool>,
}
