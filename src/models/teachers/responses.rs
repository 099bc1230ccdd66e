use super::entities::Teacher;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 教师列表行（附带表格展示的科目/班级名）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub teacher: Teacher,
    pub subjects: Vec<String>,
    pub classes: Vec<String>,
}

// 教师列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListResponse {
    pub items: Vec<TeacherListItem>,
    pub pagination: PaginationInfo,
}
