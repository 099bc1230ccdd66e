use super::entities::AttendanceRecord;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 出勤列表行（附带学生与课程名）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub record: AttendanceRecord,
    pub student_name: String,
    pub lesson_name: String,
}

// 出勤列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListResponse {
    pub items: Vec<AttendanceListItem>,
    pub pagination: PaginationInfo,
}
