use super::entities::AssessmentResult;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 成绩列表行（附带考核标题、学生/教师/班级名与考核时间）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct ResultListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub result: AssessmentResult,
    pub title: String,
    pub student_name: String,
    pub teacher_name: String,
    pub class_name: String,
    pub start_time: chrono::DateTime<chrono::Utc>,
}

// 成绩列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct ResultListResponse {
    pub items: Vec<ResultListItem>,
    pub pagination: PaginationInfo,
}
