//! 年级存储操作

use super::SeaOrmStorage;
use crate::entity::grades::{Column, Entity as Grades};
use crate::errors::{Result, SchoolSystemError};
use crate::models::grades::entities::Grade;
use sea_orm::{EntityTrait, QueryOrder};

impl SeaOrmStorage {
    /// 列出所有年级（K-12，数量固定，不分页）
    pub async fn list_grades_impl(&self) -> Result<Vec<Grade>> {
        let grades = Grades::find()
            .order_by_asc(Column::Level)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询年级失败: {e}")))?;

        Ok(grades.into_iter().map(|m| m.into_grade()).collect())
    }
}
