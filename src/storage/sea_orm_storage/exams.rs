//! 考试存储操作

use super::SeaOrmStorage;
use crate::entity::exams::{ActiveModel, Column, Entity as Exams, Relation};
use crate::entity::lessons::{Column as LessonColumn, Relation as LessonRelation};
use crate::entity::subjects::{Column as SubjectColumn, Entity as Subjects};
use crate::errors::{Result, SchoolSystemError};
use crate::models::common::list_query::{FilterSpec, ListQuery, build_list_query, parse_id};
use crate::models::{
    ITEMS_PER_PAGE, ListParams, PaginationInfo,
    exams::{
        entities::Exam,
        requests::{CreateExamRequest, UpdateExamRequest},
        responses::{ExamListItem, ExamListResponse},
    },
};
use crate::utils::contains_insensitive;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

// 识别键表：teacherId / classId 经课程关系过滤，search 模糊匹配科目名
static EXAM_FILTERS: FilterSpec = FilterSpec {
    entries: &[
        ("teacherId", |value| {
            parse_id(value).map(|id| Condition::all().add(LessonColumn::TeacherId.eq(id)))
        }),
        ("classId", |value| {
            parse_id(value).map(|id| Condition::all().add(LessonColumn::ClassId.eq(id)))
        }),
        ("search", |value| {
            Some(Condition::all().add(contains_insensitive(
                Subjects,
                SubjectColumn::Name,
                value,
            )))
        }),
    ],
};

impl SeaOrmStorage {
    /// 创建考试
    pub async fn create_exam_impl(&self, req: CreateExamRequest) -> Result<Exam> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            start_time: Set(req.start_time.timestamp()),
            end_time: Set(req.end_time.timestamp()),
            lesson_id: Set(req.lesson_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建考试失败: {e}")))?;

        Ok(result.into_exam())
    }

    /// 分页列出考试（附带科目/班级/教师名）
    pub async fn list_exams_with_pagination_impl(
        &self,
        params: ListParams,
    ) -> Result<ExamListResponse> {
        let ListQuery { filter, window } = build_list_query(&params, &EXAM_FILTERS, ITEMS_PER_PAGE);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let (total, exams) = {
            // 过滤条件落在课程及科目列上，把关系链接入查询
            let paginator = Exams::find()
                .join(JoinType::InnerJoin, Relation::Lesson.def())
                .join(JoinType::InnerJoin, LessonRelation::Subject.def())
                .filter(filter)
                .order_by_asc(Column::Id)
                .paginate(&txn, window.take);

            let total = paginator.num_items().await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询考试总数失败: {e}"))
            })?;

            let exams = paginator.fetch_page(window.page_index()).await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询考试列表失败: {e}"))
            })?;

            (total, exams)
        };

        let lesson_ids: Vec<i64> = exams.iter().map(|e| e.lesson_id).collect();
        let mut display_map = self.lesson_display_map_impl(&txn, lesson_ids).await?;

        txn.commit()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("提交事务失败: {e}")))?;

        let items = exams
            .into_iter()
            .map(|model| {
                let display = display_map.remove(&model.lesson_id).unwrap_or_default();
                ExamListItem {
                    exam: model.into_exam(),
                    subject_name: display.subject_name,
                    class_name: display.class_name,
                    teacher_name: display.teacher_name,
                }
            })
            .collect();

        Ok(ExamListResponse {
            items,
            pagination: PaginationInfo::new(window.current_page, window.take, total),
        })
    }

    /// 更新考试
    pub async fn update_exam_impl(
        &self,
        exam_id: i64,
        update: UpdateExamRequest,
    ) -> Result<Option<Exam>> {
        let existing = Exams::find_by_id(exam_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询考试失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(exam_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(start_time) = update.start_time {
            model.start_time = Set(start_time.timestamp());
        }

        if let Some(end_time) = update.end_time {
            model.end_time = Set(end_time.timestamp());
        }

        if let Some(lesson_id) = update.lesson_id {
            model.lesson_id = Set(lesson_id);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新考试失败: {e}")))?;

        Ok(Some(result.into_exam()))
    }

    /// 删除考试
    pub async fn delete_exam_impl(&self, exam_id: i64) -> Result<bool> {
        let result = Exams::delete_by_id(exam_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除考试失败: {e}")))?;

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
    fn test_search_filters_on_subject_name() {
        let filter = EXAM_FILTERS.build(&params(&[("search", "math")]));
        let expected = Condition::all().add(Condition::all().add(contains_insensitive(
            Subjects,
            SubjectColumn::Name,
            "math",
        )));
        assert_eq!(filter, expected);
    }

    #[test]
    fn test_teacher_and_class_keys_hit_lesson_columns() {
        let filter = EXAM_FILTERS.build(&params(&[("teacherId", "4"), ("classId", "9")]));
        assert_ne!(filter, Condition::all());
        // 未识别键不改变输出
        let with_noise = EXAM_FILTERS.build(&params(&[
            ("teacherId", "4"),
            ("classId", "9"),
            ("sort", "desc"),
        ]));
        assert_eq!(filter, with_noise);
    }

    #[test]
    fn test_empty_params_mean_first_page_unfiltered() {
        let query = build_list_query(&params(&[]), &EXAM_FILTERS, ITEMS_PER_PAGE);
        assert_eq!(query.filter, Condition::all());
        assert_eq!(
            query.window,
            PageWindow {
                current_page: 1,
                skip: 0,
                take: ITEMS_PER_PAGE
            }
        );
    }
}
