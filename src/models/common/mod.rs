pub mod enums;
pub mod list_query;
pub mod pagination;
pub mod response;

pub use enums::{Sex, WeekDay};
pub use list_query::{FilterSpec, ListParams, ListQuery, PageWindow};
pub use pagination::{PageControl, Pager, PaginationInfo};
pub use response::ApiResponse;
