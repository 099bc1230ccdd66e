//! 家长存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::parents::{ActiveModel, Column, Entity as Parents};
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::errors::{Result, SchoolSystemError};
use crate::models::common::list_query::{FilterSpec, ListQuery, build_list_query};
use crate::models::{
    ITEMS_PER_PAGE, ListParams, PaginationInfo,
    parents::{
        entities::Parent,
        requests::{CreateParentRequest, UpdateParentRequest},
        responses::{ParentListItem, ParentListResponse},
    },
};
use crate::utils::contains_insensitive;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

// 识别键表：search 模糊匹配名字
static PARENT_FILTERS: FilterSpec = FilterSpec {
    entries: &[("search", |value| {
        Some(Condition::all().add(contains_insensitive(Parents, Column::Name, value)))
    })],
};

impl SeaOrmStorage {
    /// 创建家长
    pub async fn create_parent_impl(&self, req: CreateParentRequest) -> Result<Parent> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            username: Set(req.username),
            name: Set(req.name),
            surname: Set(req.surname),
            email: Set(req.email),
            phone: Set(req.phone),
            address: Set(req.address),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建家长失败: {e}")))?;

        Ok(result.into_parent())
    }

    /// 分页列出家长（附带名下学生姓名）
    pub async fn list_parents_with_pagination_impl(
        &self,
        params: ListParams,
    ) -> Result<ParentListResponse> {
        let ListQuery { filter, window } =
            build_list_query(&params, &PARENT_FILTERS, ITEMS_PER_PAGE);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let (total, parents) = {
            let paginator = Parents::find()
                .filter(filter)
                .order_by_asc(Column::Id)
                .paginate(&txn, window.take);

            let total = paginator.num_items().await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询家长总数失败: {e}"))
            })?;

            let parents = paginator.fetch_page(window.page_index()).await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询家长列表失败: {e}"))
            })?;

            (total, parents)
        };

        // 批量取名下学生
        let parent_ids: Vec<i64> = parents.iter().map(|p| p.id).collect();
        let mut student_map: HashMap<i64, Vec<String>> = HashMap::new();
        if !parent_ids.is_empty() {
            let students = Students::find()
                .filter(StudentColumn::ParentId.is_in(parent_ids))
                .all(&txn)
                .await
                .map_err(|e| {
                    SchoolSystemError::database_operation(format!("查询名下学生失败: {e}"))
                })?;

            for student in students {
                student_map
                    .entry(student.parent_id)
                    .or_default()
                    .push(format!("{} {}", student.name, student.surname));
            }
        }

        txn.commit()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("提交事务失败: {e}")))?;

        let items = parents
            .into_iter()
            .map(|model| {
                let students = student_map.remove(&model.id).unwrap_or_default();
                ParentListItem {
                    parent: model.into_parent(),
                    students,
                }
            })
            .collect();

        Ok(ParentListResponse {
            items,
            pagination: PaginationInfo::new(window.current_page, window.take, total),
        })
    }

    /// 更新家长
    pub async fn update_parent_impl(
        &self,
        parent_id: i64,
        update: UpdateParentRequest,
    ) -> Result<Option<Parent>> {
        let existing = Parents::find_by_id(parent_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询家长失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(parent_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(surname) = update.surname {
            model.surname = Set(surname);
        }

        if let Some(email) = update.email {
            model.email = Set(Some(email));
        }

        if let Some(phone) = update.phone {
            model.phone = Set(phone);
        }

        if let Some(address) = update.address {
            model.address = Set(address);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新家长失败: {e}")))?;

        Ok(Some(result.into_parent()))
    }

    /// 删除家长
    pub async fn delete_parent_impl(&self, parent_id: i64) -> Result<bool> {
        let result = Parents::delete_by_id(parent_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除家长失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
