pub mod common;

pub mod announcements;
pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod classes;
pub mod events;
pub mod exams;
pub mod grades;
pub mod lessons;
pub mod parents;
pub mod results;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use common::list_query::{ITEMS_PER_PAGE, ListParams};
pub use common::pagination::{PageControl, Pager, PaginationInfo};
pub use common::response::ApiResponse;

// 业务错误码（HTTP 响应 code 字段）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,
    BadRequest = 40000,
    Unauthorized = 40100,
    AuthFailed = 40101,
    Forbidden = 40300,
    NotFound = 40400,
    Conflict = 40900,
    RateLimitExceeded = 42900,
    InternalServerError = 50000,
}

// 记录程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
