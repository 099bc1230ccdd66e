use crate::models::common::Sex;
use serde::Deserialize;
use ts_rs::TS;

// 教师创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct CreateTeacherRequest {
    pub username: String,
    pub name: String,
    pub surname: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: String,
    pub img: Option<String>,
    pub blood_type: String,
    pub sex: Sex,
    pub birthday: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub subject_ids: Vec<i64>,
}

// 教师更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct UpdateTeacherRequest {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub img: Option<String>,
    pub blood_type: Option<String>,
    pub sex: Option<Sex>,
    pub birthday: Option<chrono::DateTime<chrono::Utc>>,
    pub subject_ids: Option<Vec<i64>>,
}
