use super::entities::Exam;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 考试列表行（附带科目/班级/教师名）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct ExamListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub exam: Exam,
    pub subject_name: String,
    pub class_name: String,
    pub teacher_name: String,
}

// 考试列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct ExamListResponse {
    pub items: Vec<ExamListItem>,
    pub pagination: PaginationInfo,
}
