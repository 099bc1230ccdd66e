use super::entities::Subject;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 科目列表行（附带任课教师姓名）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub subject: Subject,
    pub teachers: Vec<String>,
}

// 科目列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectListResponse {
    pub items: Vec<SubjectListItem>,
    pub pagination: PaginationInfo,
}
