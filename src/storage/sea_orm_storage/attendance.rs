//! 出勤存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::attendance::{ActiveModel, Column, Entity as Attendance, Relation};
use crate::entity::lessons::Column as LessonColumn;
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::errors::{Result, SchoolSystemError};
use crate::models::common::list_query::{FilterSpec, ListQuery, build_list_query, parse_id};
use crate::models::{
    ITEMS_PER_PAGE, ListParams, PaginationInfo,
    attendance::{
        entities::AttendanceRecord,
        requests::{CreateAttendanceRequest, UpdateAttendanceRequest},
        responses::{AttendanceListItem, AttendanceListResponse},
    },
};
use crate::utils::contains_insensitive;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

// 识别键表：studentId 精确匹配，classId 经课程关系过滤，search 模糊匹配学生名字
static ATTENDANCE_FILTERS: FilterSpec = FilterSpec {
    entries: &[
        ("studentId", |value| {
            parse_id(value).map(|id| Condition::all().add(Column::StudentId.eq(id)))
        }),
        ("classId", |value| {
            parse_id(value).map(|id| Condition::all().add(LessonColumn::ClassId.eq(id)))
        }),
        ("search", |value| {
            Some(Condition::all().add(contains_insensitive(
                Students,
                StudentColumn::Name,
                value,
            )))
        }),
    ],
};

impl SeaOrmStorage {
    /// 创建出勤记录
    pub async fn create_attendance_impl(
        &self,
        req: CreateAttendanceRequest,
    ) -> Result<AttendanceRecord> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            date: Set(req.date.timestamp()),
            present: Set(req.present),
            student_id: Set(req.student_id),
            lesson_id: Set(req.lesson_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建出勤记录失败: {e}")))?;

        Ok(result.into_attendance())
    }

    /// 分页列出出勤记录（附带学生与课程名）
    pub async fn list_attendance_with_pagination_impl(
        &self,
        params: ListParams,
    ) -> Result<AttendanceListResponse> {
        let ListQuery { filter, window } =
            build_list_query(&params, &ATTENDANCE_FILTERS, ITEMS_PER_PAGE);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let (total, records) = {
            let paginator = Attendance::find()
                .join(JoinType::InnerJoin, Relation::Lesson.def())
                .join(JoinType::InnerJoin, Relation::Student.def())
                .filter(filter)
                .order_by_asc(Column::Id)
                .paginate(&txn, window.take);

            let total = paginator.num_items().await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询出勤总数失败: {e}"))
            })?;

            let records = paginator.fetch_page(window.page_index()).await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询出勤列表失败: {e}"))
            })?;

            (total, records)
        };

        // 批量取学生名与课程名
        let student_ids: Vec<i64> = records.iter().map(|r| r.student_id).collect();
        let lesson_ids: Vec<i64> = records.iter().map(|r| r.lesson_id).collect();

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

        let display_map = self.lesson_display_map_impl(&txn, lesson_ids).await?;

        txn.commit()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("提交事务失败: {e}")))?;

        let items = records
            .into_iter()
            .map(|model| AttendanceListItem {
                student_name: student_map
                    .get(&model.student_id)
                    .cloned()
                    .unwrap_or_default(),
                lesson_name: display_map
                    .get(&model.lesson_id)
                    .map(|d| d.lesson_name.clone())
                    .unwrap_or_default(),
                record: model.into_attendance(),
            })
            .collect();

        Ok(AttendanceListResponse {
            items,
            pagination: PaginationInfo::new(window.current_page, window.take, total),
        })
    }

    /// 更新出勤记录
    pub async fn update_attendance_impl(
        &self,
        record_id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<AttendanceRecord>> {
        let existing = Attendance::find_by_id(record_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询出勤记录失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(record_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(date) = update.date {
            model.date = Set(date.timestamp());
        }

        if let Some(present) = update.present {
            model.present = Set(present);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新出勤记录失败: {e}")))?;

        Ok(Some(result.into_attendance()))
    }

    /// 删除出勤记录
    pub async fn delete_attendance_impl(&self, record_id: i64) -> Result<bool> {
        let result = Attendance::delete_by_id(record_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除出勤记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
