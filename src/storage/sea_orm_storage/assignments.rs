//! 作业存储操作

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments, Relation};
use crate::entity::classes::{Column as ClassColumn, Entity as Classes};
use crate::entity::lessons::{Column as LessonColumn, Relation as LessonRelation};
use crate::entity::subjects::{Column as SubjectColumn, Entity as Subjects};
use crate::entity::teachers::{Column as TeacherColumn, Entity as Teachers};
use crate::errors::{Result, SchoolSystemError};
use crate::models::common::list_query::{FilterSpec, ListQuery, build_list_query, parse_id};
use crate::models::{
    ITEMS_PER_PAGE, ListParams, PaginationInfo,
    assignments::{
        entities::Assignment,
        requests::{CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::{AssignmentListItem, AssignmentListResponse},
    },
};
use crate::utils::contains_insensitive;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

// 识别键表：teacherId / classId 经课程关系过滤，
// search 在科目名、班级名、教师名三处做 OR 模糊匹配
static ASSIGNMENT_FILTERS: FilterSpec = FilterSpec {
    entries: &[
        ("teacherId", |value| {
            parse_id(value).map(|id| Condition::all().add(LessonColumn::TeacherId.eq(id)))
        }),
        ("classId", |value| {
            parse_id(value).map(|id| Condition::all().add(LessonColumn::ClassId.eq(id)))
        }),
        ("search", |value| {
            Some(
                Condition::any()
                    .add(contains_insensitive(Subjects, SubjectColumn::Name, value))
                    .add(contains_insensitive(Classes, ClassColumn::Name, value))
                    .add(contains_insensitive(Teachers, TeacherColumn::Name, value)),
            )
        }),
    ],
};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(&self, req: CreateAssignmentRequest) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            start_date: Set(req.start_date.timestamp()),
            due_date: Set(req.due_date.timestamp()),
            lesson_id: Set(req.lesson_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 分页列出作业（附带科目/班级/教师名）
    pub async fn list_assignments_with_pagination_impl(
        &self,
        params: ListParams,
    ) -> Result<AssignmentListResponse> {
        let ListQuery { filter, window } =
            build_list_query(&params, &ASSIGNMENT_FILTERS, ITEMS_PER_PAGE);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let (total, assignments) = {
            // search 需要课程 -> 科目/班级/教师 三条关系都在查询里
            let paginator = Assignments::find()
                .join(JoinType::InnerJoin, Relation::Lesson.def())
                .join(JoinType::InnerJoin, LessonRelation::Subject.def())
                .join(JoinType::InnerJoin, LessonRelation::Class.def())
                .join(JoinType::InnerJoin, LessonRelation::Teacher.def())
                .filter(filter)
                .order_by_asc(Column::Id)
                .paginate(&txn, window.take);

            let total = paginator.num_items().await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询作业总数失败: {e}"))
            })?;

            let assignments = paginator.fetch_page(window.page_index()).await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询作业列表失败: {e}"))
            })?;

            (total, assignments)
        };

        let lesson_ids: Vec<i64> = assignments.iter().map(|a| a.lesson_id).collect();
        let mut display_map = self.lesson_display_map_impl(&txn, lesson_ids).await?;

        txn.commit()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("提交事务失败: {e}")))?;

        let items = assignments
            .into_iter()
            .map(|model| {
                let display = display_map.remove(&model.lesson_id).unwrap_or_default();
                AssignmentListItem {
                    assignment: model.into_assignment(),
                    subject_name: display.subject_name,
                    class_name: display.class_name,
                    teacher_name: display.teacher_name,
                }
            })
            .collect();

        Ok(AssignmentListResponse {
            items,
            pagination: PaginationInfo::new(window.current_page, window.take, total),
        })
    }

    /// 更新作业
    pub async fn update_assignment_impl(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        let existing = Assignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询作业失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(assignment_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(start_date) = update.start_date {
            model.start_date = Set(start_date.timestamp());
        }

        if let Some(due_date) = update.due_date {
            model.due_date = Set(due_date.timestamp());
        }

        if let Some(lesson_id) = update.lesson_id {
            model.lesson_id = Set(lesson_id);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新作业失败: {e}")))?;

        Ok(Some(result.into_assignment()))
    }

    /// 删除作业
    pub async fn delete_assignment_impl(&self, assignment_id: i64) -> Result<bool> {
        let result = Assignments::delete_by_id(assignment_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::list_query::PageWindow;

    fn params(pairs: &[(&str, &str)]) -> ListParams {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_class_filter_on_second_page() {
        // pageSize=10、page=2、classId 过滤：skip=10、take=10，
        // 条件落在课程的 class_id 上
        let query = build_list_query(
            &params(&[("page", "2"), ("classId", "7")]),
            &ASSIGNMENT_FILTERS,
            10,
        );

        assert_eq!(
            query.window,
            PageWindow {
                current_page: 2,
                skip: 10,
                take: 10
            }
        );

        let expected =
            Condition::all().add(Condition::all().add(LessonColumn::ClassId.eq(7i64)));
        assert_eq!(query.filter, expected);
    }

    #[test]
    fn test_search_is_an_or_across_three_names() {
        let filter = ASSIGNMENT_FILTERS.build(&params(&[("search", "math")]));
        let expected = Condition::all().add(
            Condition::any()
                .add(contains_insensitive(Subjects, SubjectColumn::Name, "math"))
                .add(contains_insensitive(Classes, ClassColumn::Name, "math"))
                .add(contains_insensitive(Teachers, TeacherColumn::Name, "math")),
        );
        assert_eq!(filter, expected);
    }

    #[test]
    fn test_unknown_key_output_unchanged() {
        let base = ASSIGNMENT_FILTERS.build(&params(&[("teacherId", "3")]));
        let noisy = ASSIGNMENT_FILTERS.build(&params(&[("teacherId", "3"), ("foo", "bar")]));
        assert_eq!(base, noisy);
    }
}
