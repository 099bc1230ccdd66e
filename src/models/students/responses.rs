use super::entities::Student;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 学生列表行（附带班级名与年级）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub student: Student,
    pub class_name: String,
    pub grade_level: i32,
}

// 学生列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListResponse {
    pub items: Vec<StudentListItem>,
    pub pagination: PaginationInfo,
}
