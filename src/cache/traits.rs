use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    Error(String),
}

/// 字符串对象缓存
///
/// 所有后端都以字符串为值类型，调用方自行负责序列化。
/// 缓存操作失败不向上冒泡，最多损失一次命中。
#[async_trait]
pub trait ObjectCache: Send + Sync {
    /// 读取缓存
    async fn get_raw(&self, key: &str) -> CacheResult<String>;

    /// 写入缓存，ttl 单位为秒（0 表示使用后端默认）
    async fn insert_raw(&self, key: String, value: String, ttl: u64);

    /// 删除指定键
    async fn remove(&self, key: &str);

    /// 清空缓存
    async fn clear(&self);
}
