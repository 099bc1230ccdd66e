//! 成绩存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::assignments::{Column as AssignmentColumn, Entity as Assignments};
use crate::entity::exams::{Column as ExamColumn, Entity as Exams};
use crate::entity::results::{ActiveModel, Column, Entity as Results, Relation};
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::errors::{Result, SchoolSystemError};
use crate::models::common::list_query::{FilterSpec, ListQuery, build_list_query, parse_id};
use crate::models::{
    ITEMS_PER_PAGE, ListParams, PaginationInfo,
    results::{
        entities::AssessmentResult,
        requests::{CreateResultRequest, UpdateResultRequest},
        responses::{ResultListItem, ResultListResponse},
    },
};
use crate::utils::contains_insensitive;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

// 识别键表：studentId 精确匹配，search 在考试标题与学生名字上做 OR 模糊匹配
static RESULT_FILTERS: FilterSpec = FilterSpec {
    entries: &[
        ("studentId", |value| {
            parse_id(value).map(|id| Condition::all().add(Column::StudentId.eq(id)))
        }),
        ("search", |value| {
            Some(
                Condition::any()
                    .add(contains_insensitive(Exams, ExamColumn::Title, value))
                    .add(contains_insensitive(Students, StudentColumn::Name, value)),
            )
        }),
    ],
};

impl SeaOrmStorage {
    /// 创建成绩
    pub async fn create_result_impl(&self, req: CreateResultRequest) -> Result<AssessmentResult> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            score: Set(req.score),
            exam_id: Set(req.exam_id),
            assignment_id: Set(req.assignment_id),
            student_id: Set(req.student_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建成绩失败: {e}")))?;

        Ok(result.into_result())
    }

    /// 分页列出成绩（附带考核标题、学生/教师/班级名与考核时间）
    pub async fn list_results_with_pagination_impl(
        &self,
        params: ListParams,
    ) -> Result<ResultListResponse> {
        let ListQuery { filter, window } =
            build_list_query(&params, &RESULT_FILTERS, ITEMS_PER_PAGE);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let (total, results) = {
            // search 需要考试标题与学生名字；作业来源的成绩没有考试行，用左连接保留
            let paginator = Results::find()
                .join(JoinType::LeftJoin, Relation::Exam.def())
                .join(JoinType::InnerJoin, Relation::Student.def())
                .filter(filter)
                .order_by_asc(Column::Id)
                .paginate(&txn, window.take);

            let total = paginator.num_items().await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询成绩总数失败: {e}"))
            })?;

            let results = paginator.fetch_page(window.page_index()).await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询成绩列表失败: {e}"))
            })?;

            (total, results)
        };

        // 批量取考核来源（考试或作业）
        let exam_ids: Vec<i64> = results.iter().filter_map(|r| r.exam_id).collect();
        let assignment_ids: Vec<i64> = results.iter().filter_map(|r| r.assignment_id).collect();
        let student_ids: Vec<i64> = results.iter().map(|r| r.student_id).collect();

        // (标题, 考核时间, 课程ID)
        let mut exam_map: HashMap<i64, (String, i64, i64)> = HashMap::new();
        if !exam_ids.is_empty() {
            for exam in Exams::find()
                .filter(ExamColumn::Id.is_in(exam_ids))
                .all(&txn)
                .await
                .map_err(|e| SchoolSystemError::database_operation(format!("查询考试失败: {e}")))?
            {
                exam_map.insert(exam.id, (exam.title, exam.start_time, exam.lesson_id));
            }
        }

        let mut assignment_map: HashMap<i64, (String, i64, i64)> = HashMap::new();
        if !assignment_ids.is_empty() {
            for assignment in Assignments::find()
                .filter(AssignmentColumn::Id.is_in(assignment_ids))
                .all(&txn)
                .await
                .map_err(|e| SchoolSystemError::database_operation(format!("查询作业失败: {e}")))?
            {
                assignment_map.insert(
                    assignment.id,
                    (assignment.title, assignment.start_date, assignment.lesson_id),
                );
            }
        }

        let mut student_map: HashMap<i64, String> = HashMap::new();
        if !student_ids.is_empty() {
            for student in Students::find()
                .filter(StudentColumn::Id.is_in(student_ids))
                .all(&txn)
                .await
                .map_err(|e| SchoolSystemError::database_operation(format!("查询学生失败: {e}")))?
            {
                student_map.insert(student.id, format!("{} {}", student.name, student.surname));
            }
        }

        let lesson_ids: Vec<i64> = exam_map
            .values()
            .chain(assignment_map.values())
            .map(|(_, _, lesson_id)| *lesson_id)
            .collect();
        let display_map = self.lesson_display_map_impl(&txn, lesson_ids).await?;

        txn.commit()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("提交事务失败: {e}")))?;

        let items = results
            .into_iter()
            .map(|model| {
                let source = model
                    .exam_id
                    .and_then(|id| exam_map.get(&id))
                    .or_else(|| model.assignment_id.and_then(|id| assignment_map.get(&id)));

                let (title, start_ts, lesson_id) = match source {
                    Some((title, start_ts, lesson_id)) => (title.clone(), *start_ts, Some(*lesson_id)),
                    None => (String::new(), 0, None),
                };

                let display = lesson_id
                    .and_then(|id| display_map.get(&id).cloned())
                    .unwrap_or_default();

                ResultListItem {
                    title,
                    student_name: student_map
                        .get(&model.student_id)
                        .cloned()
                        .unwrap_or_default(),
                    teacher_name: display.teacher_name,
                    class_name: display.class_name,
                    start_time: chrono::DateTime::<chrono::Utc>::from_timestamp(start_ts, 0)
                        .unwrap_or_default(),
                    result: model.into_result(),
                }
            })
            .collect();

        Ok(ResultListResponse {
            items,
            pagination: PaginationInfo::new(window.current_page, window.take, total),
        })
    }

    /// 更新成绩
    pub async fn update_result_impl(
        &self,
        result_id: i64,
        update: UpdateResultRequest,
    ) -> Result<Option<AssessmentResult>> {
        let existing = Results::find_by_id(result_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询成绩失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(result_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(score) = update.score {
            model.score = Set(score);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新成绩失败: {e}")))?;

        Ok(Some(result.into_result()))
    }

    /// 删除成绩
    pub async fn delete_result_impl(&self, result_id: i64) -> Result<bool> {
        let result = Results::delete_by_id(result_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除成绩失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
