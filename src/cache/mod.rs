//! 对象缓存层
//!
//! 通过注册表按配置选择后端：`moka`（进程内）或 `redis`。
//! 后端在加载期通过 `declare_object_cache_plugin!` 自注册。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};
