use crate::models::common::Sex;
use serde::Deserialize;
use ts_rs::TS;

// 学生创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
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
    pub class_id: i64,
    pub grade_id: i64,
    pub parent_id: i64,
}

// 学生更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub img: Option<String>,
    pub blood_type: Option<String>,
    pub sex: Option<Sex>,
    pub birthday: Option<chrono::DateTime<chrono::Utc>>,
    pub class_id: Option<i64>,
    pub grade_id: Option<i64>,
    pub parent_id: Option<i64>,
}
