use super::entities::Lesson;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 课程列表行（附带科目/班级/教师名）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct LessonListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub lesson: Lesson,
    pub subject_name: String,
    pub class_name: String,
    pub teacher_name: String,
}

// 课程列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct LessonListResponse {
    pub items: Vec<LessonListItem>,
    pub pagination: PaginationInfo,
}
