use serde::Deserialize;
use ts_rs::TS;

// 科目创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct CreateSubjectRequest {
    pub name: String,
    #[serde(default)]
    pub teacher_ids: Vec<i64>,
}

// 科目更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct UpdateSubjectRequest {
    pub name: Option<String>,
    pub teacher_ids: Option<Vec<i64>>,
}
