use serde::Deserialize;
use ts_rs::TS;

// 班级创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct CreateClassRequest {
    pub name: String,
    pub capacity: i32,
    pub grade_id: i64,
    pub supervisor_id: Option<i64>,
}

// 班级更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub grade_id: Option<i64>,
    pub supervisor_id: Option<i64>,
}
