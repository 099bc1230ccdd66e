use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 出勤记录实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceRecord {
    pub id: i64,
    pub date: chrono::DateTime<chrono::Utc>,
    pub present: bool,
    pub student_id: i64,
    pub lesson_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
