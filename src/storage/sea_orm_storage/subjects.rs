//! 科目存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::subject_teachers::{
    ActiveModel as SubjectTeacherActiveModel, Column as SubjectTeacherColumn,
    Entity as SubjectTeachers,
};
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::entity::teachers::Entity as Teachers;
use crate::errors::{Result, SchoolSystemError};
use crate::models::common::list_query::{FilterSpec, ListQuery, build_list_query};
use crate::models::{
    ITEMS_PER_PAGE, ListParams, PaginationInfo,
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, UpdateSubjectRequest},
        responses::{SubjectListItem, SubjectListResponse},
    },
};
use crate::utils::contains_insensitive;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

// 识别键表：search 模糊匹配科目名
static SUBJECT_FILTERS: FilterSpec = FilterSpec {
    entries: &[("search", |value| {
        Some(Condition::all().add(contains_insensitive(Subjects, Column::Name, value)))
    })],
};

impl SeaOrmStorage {
    /// 创建科目并关联任课教师
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建科目失败: {e}")))?;

        self.set_subject_teachers_impl(&self.db, result.id, &req.teacher_ids)
            .await?;

        Ok(result.into_subject())
    }

    /// 分页列出科目（附带任课教师姓名）
    pub async fn list_subjects_with_pagination_impl(
        &self,
        params: ListParams,
    ) -> Result<SubjectListResponse> {
        let ListQuery { filter, window } =
            build_list_query(&params, &SUBJECT_FILTERS, ITEMS_PER_PAGE);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let (total, subjects) = {
            let paginator = Subjects::find()
                .filter(filter)
                .order_by_asc(Column::Id)
                .paginate(&txn, window.take);

            let total = paginator.num_items().await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询科目总数失败: {e}"))
            })?;

            let subjects = paginator.fetch_page(window.page_index()).await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询科目列表失败: {e}"))
            })?;

            (total, subjects)
        };

        // 批量取本页科目的任课教师
        let subject_ids: Vec<i64> = subjects.iter().map(|s| s.id).collect();
        let mut teacher_map: HashMap<i64, Vec<String>> = HashMap::new();
        if !subject_ids.is_empty() {
            let links = SubjectTeachers::find()
                .filter(SubjectTeacherColumn::SubjectId.is_in(subject_ids))
                .find_also_related(Teachers)
                .all(&txn)
                .await
                .map_err(|e| {
                    SchoolSystemError::database_operation(format!("查询任课教师失败: {e}"))
                })?;

            for (link, teacher) in links {
                if let Some(teacher) = teacher {
                    teacher_map
                        .entry(link.subject_id)
                        .or_default()
                        .push(format!("{} {}", teacher.name, teacher.surname));
                }
            }
        }

        txn.commit()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("提交事务失败: {e}")))?;

        let items = subjects
            .into_iter()
            .map(|model| {
                let teachers = teacher_map.remove(&model.id).unwrap_or_default();
                SubjectListItem {
                    subject: model.into_subject(),
                    teachers,
                }
            })
            .collect();

        Ok(SubjectListResponse {
            items,
            pagination: PaginationInfo::new(window.current_page, window.take, total),
        })
    }

    /// 更新科目
    pub async fn update_subject_impl(
        &self,
        subject_id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let existing = Subjects::find_by_id(subject_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询科目失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(subject_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新科目失败: {e}")))?;

        if let Some(teacher_ids) = update.teacher_ids {
            SubjectTeachers::delete_many()
                .filter(SubjectTeacherColumn::SubjectId.eq(subject_id))
                .exec(&self.db)
                .await
                .map_err(|e| {
                    SchoolSystemError::database_operation(format!("清理任课教师关联失败: {e}"))
                })?;
            self.set_subject_teachers_impl(&self.db, subject_id, &teacher_ids)
                .await?;
        }

        Ok(Some(result.into_subject()))
    }

    /// 删除科目（连同任课教师关联）
    pub async fn delete_subject_impl(&self, subject_id: i64) -> Result<bool> {
        SubjectTeachers::delete_many()
            .filter(SubjectTeacherColumn::SubjectId.eq(subject_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                SchoolSystemError::database_operation(format!("清理任课教师关联失败: {e}"))
            })?;

        let result = Subjects::delete_by_id(subject_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除科目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 写入科目-教师关联
    pub(crate) async fn set_subject_teachers_impl<C: ConnectionTrait>(
        &self,
        conn: &C,
        subject_id: i64,
        teacher_ids: &[i64],
    ) -> Result<()> {
        if teacher_ids.is_empty() {
            return Ok(());
        }

        let links: Vec<SubjectTeacherActiveModel> = teacher_ids
            .iter()
            .map(|teacher_id| SubjectTeacherActiveModel {
                subject_id: Set(subject_id),
                teacher_id: Set(*teacher_id),
            })
            .collect();

        SubjectTeachers::insert_many(links)
            .exec(conn)
            .await
            .map_err(|e| {
                SchoolSystemError::database_operation(format!("创建任课教师关联失败: {e}"))
            })?;

        Ok(())
    }
}
