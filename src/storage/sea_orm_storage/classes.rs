//! 班级存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::entity::grades::Entity as Grades;
use crate::entity::teachers::{Column as TeacherColumn, Entity as Teachers};
use crate::errors::{Result, SchoolSystemError};
use crate::models::common::list_query::{FilterSpec, ListQuery, build_list_query, parse_id};
use crate::models::{
    ITEMS_PER_PAGE, ListParams, PaginationInfo,
    classes::{
        entities::Class,
        requests::{CreateClassRequest, UpdateClassRequest},
        responses::{ClassListItem, ClassListResponse},
    },
};
use crate::utils::contains_insensitive;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

// 识别键表：supervisorId 精确匹配班主任，search 模糊匹配班级名
static CLASS_FILTERS: FilterSpec = FilterSpec {
    entries: &[
        ("supervisorId", |value| {
            parse_id(value).map(|id| Condition::all().add(Column::SupervisorId.eq(id)))
        }),
        ("search", |value| {
            Some(Condition::all().add(contains_insensitive(Classes, Column::Name, value)))
        }),
    ],
};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            capacity: Set(req.capacity),
            grade_id: Set(req.grade_id),
            supervisor_id: Set(req.supervisor_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建班级失败: {e}")))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 分页列出班级（附带年级与班主任姓名）
    pub async fn list_classes_with_pagination_impl(
        &self,
        params: ListParams,
    ) -> Result<ClassListResponse> {
        let ListQuery { filter, window } =
            build_list_query(&params, &CLASS_FILTERS, ITEMS_PER_PAGE);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let (total, classes) = {
            let paginator = Classes::find()
                .filter(filter)
                .order_by_asc(Column::Id)
                .paginate(&txn, window.take);

            let total = paginator.num_items().await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询班级总数失败: {e}"))
            })?;

            let classes = paginator.fetch_page(window.page_index()).await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询班级列表失败: {e}"))
            })?;

            (total, classes)
        };

        // 批量取年级
        let grade_ids: Vec<i64> = classes.iter().map(|c| c.grade_id).collect();
        let mut grade_map: HashMap<i64, i32> = HashMap::new();
        if !grade_ids.is_empty() {
            let grades = Grades::find()
                .filter(crate::entity::grades::Column::Id.is_in(grade_ids))
                .all(&txn)
                .await
                .map_err(|e| SchoolSystemError::database_operation(format!("查询年级失败: {e}")))?;

            for grade in grades {
                grade_map.insert(grade.id, grade.level);
            }
        }

        // 批量取班主任姓名
        let supervisor_ids: Vec<i64> = classes.iter().filter_map(|c| c.supervisor_id).collect();
        let mut supervisor_map: HashMap<i64, String> = HashMap::new();
        if !supervisor_ids.is_empty() {
            let supervisors = Teachers::find()
                .filter(TeacherColumn::Id.is_in(supervisor_ids))
                .all(&txn)
                .await
                .map_err(|e| {
                    SchoolSystemError::database_operation(format!("查询班主任失败: {e}"))
                })?;

            for teacher in supervisors {
                supervisor_map.insert(teacher.id, format!("{} {}", teacher.name, teacher.surname));
            }
        }

        txn.commit()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("提交事务失败: {e}")))?;

        let items = classes
            .into_iter()
            .map(|model| {
                let grade_level = grade_map.get(&model.grade_id).copied().unwrap_or_default();
                let supervisor_name = model
                    .supervisor_id
                    .and_then(|id| supervisor_map.get(&id).cloned());
                ClassListItem {
                    class: model.into_class(),
                    grade_level,
                    supervisor_name,
                }
            })
            .collect();

        Ok(ClassListResponse {
            items,
            pagination: PaginationInfo::new(window.current_page, window.take, total),
        })
    }

    /// 更新班级
    pub async fn update_class_impl(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        let existing = self.get_class_by_id_impl(class_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(class_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(capacity) = update.capacity {
            model.capacity = Set(capacity);
        }

        if let Some(grade_id) = update.grade_id {
            model.grade_id = Set(grade_id);
        }

        if let Some(supervisor_id) = update.supervisor_id {
            model.supervisor_id = Set(Some(supervisor_id));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新班级失败: {e}")))?;

        self.get_class_by_id_impl(class_id).await
    }

    /// 删除班级
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let result = Classes::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
