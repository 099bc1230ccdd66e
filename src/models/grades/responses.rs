use super::entities::Grade;
use serde::Serialize;
use ts_rs::TS;

// 年级列表响应（年级数量固定，不分页）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeListResponse {
    pub items: Vec<Grade>,
}
