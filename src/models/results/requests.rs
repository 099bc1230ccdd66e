use serde::Deserialize;
use ts_rs::TS;

// 成绩创建请求
//
// exam_id 和 assignment_id 必须恰好填一个，服务层校验。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct CreateResultRequest {
    pub score: i32,
    pub student_id: i64,
    pub exam_id: Option<i64>,
    pub assignment_id: Option<i64>,
}

// 成绩更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct UpdateResultRequest {
    pub score: Option<i32>,
}
