//! 课程存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::classes::{Column as ClassColumn, Entity as Classes};
use crate::entity::lessons::{ActiveModel, Column, Entity as Lessons};
use crate::entity::subjects::{Column as SubjectColumn, Entity as Subjects};
use crate::entity::teachers::{Column as TeacherColumn, Entity as Teachers};
use crate::errors::{Result, SchoolSystemError};
use crate::models::common::list_query::{FilterSpec, ListQuery, build_list_query, parse_id};
use crate::models::{
    ITEMS_PER_PAGE, ListParams, PaginationInfo,
    lessons::{
        entities::Lesson,
        requests::{CreateLessonRequest, UpdateLessonRequest},
        responses::{LessonListItem, LessonListResponse},
    },
};
use crate::utils::contains_insensitive;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

// 识别键表：teacherId / classId 精确匹配本表外键，search 模糊匹配课程名
static LESSON_FILTERS: FilterSpec = FilterSpec {
    entries: &[
        ("teacherId", |value| {
            parse_id(value).map(|id| Condition::all().add(Column::TeacherId.eq(id)))
        }),
        ("classId", |value| {
            parse_id(value).map(|id| Condition::all().add(Column::ClassId.eq(id)))
        }),
        ("search", |value| {
            Some(Condition::all().add(contains_insensitive(Lessons, Column::Name, value)))
        }),
    ],
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_lesson_impl(&self, req: CreateLessonRequest) -> Result<Lesson> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            day: Set(req.day.to_string()),
            start_time: Set(req.start_time.timestamp()),
            end_time: Set(req.end_time.timestamp()),
            subject_id: Set(req.subject_id),
            class_id: Set(req.class_id),
            teacher_id: Set(req.teacher_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_lesson())
    }

    /// 分页列出课程（附带科目/班级/教师名）
    pub async fn list_lessons_with_pagination_impl(
        &self,
        params: ListParams,
    ) -> Result<LessonListResponse> {
        let ListQuery { filter, window } =
            build_list_query(&params, &LESSON_FILTERS, ITEMS_PER_PAGE);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let (total, lessons) = {
            let paginator = Lessons::find()
                .filter(filter)
                .order_by_asc(Column::Id)
                .paginate(&txn, window.take);

            let total = paginator.num_items().await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询课程总数失败: {e}"))
            })?;

            let lessons = paginator.fetch_page(window.page_index()).await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询课程列表失败: {e}"))
            })?;

            (total, lessons)
        };

        // 批量取科目/班级/教师名
        let subject_ids: Vec<i64> = lessons.iter().map(|l| l.subject_id).collect();
        let class_ids: Vec<i64> = lessons.iter().map(|l| l.class_id).collect();
        let teacher_ids: Vec<i64> = lessons.iter().map(|l| l.teacher_id).collect();

        let mut subject_map: HashMap<i64, String> = HashMap::new();
        let mut class_map: HashMap<i64, String> = HashMap::new();
        let mut teacher_map: HashMap<i64, String> = HashMap::new();

        if !lessons.is_empty() {
            for subject in Subjects::find()
                .filter(SubjectColumn::Id.is_in(subject_ids))
                .all(&txn)
                .await
                .map_err(|e| SchoolSystemError::database_operation(format!("查询科目失败: {e}")))?
            {
                subject_map.insert(subject.id, subject.name);
            }

            for class in Classes::find()
                .filter(ClassColumn::Id.is_in(class_ids))
                .all(&txn)
                .await
                .map_err(|e| SchoolSystemError::database_operation(format!("查询班级失败: {e}")))?
            {
                class_map.insert(class.id, class.name);
            }

            for teacher in Teachers::find()
                .filter(TeacherColumn::Id.is_in(teacher_ids))
                .all(&txn)
                .await
                .map_err(|e| SchoolSystemError::database_operation(format!("查询教师失败: {e}")))?
            {
                teacher_map.insert(teacher.id, format!("{} {}", teacher.name, teacher.surname));
            }
        }

        txn.commit()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("提交事务失败: {e}")))?;

        let items = lessons
            .into_iter()
            .map(|model| LessonListItem {
                subject_name: subject_map.get(&model.subject_id).cloned().unwrap_or_default(),
                class_name: class_map.get(&model.class_id).cloned().unwrap_or_default(),
                teacher_name: teacher_map.get(&model.teacher_id).cloned().unwrap_or_default(),
                lesson: model.into_lesson(),
            })
            .collect();

        Ok(LessonListResponse {
            items,
            pagination: PaginationInfo::new(window.current_page, window.take, total),
        })
    }

    /// 更新课程
    pub async fn update_lesson_impl(
        &self,
        lesson_id: i64,
        update: UpdateLessonRequest,
    ) -> Result<Option<Lesson>> {
        let existing = Lessons::find_by_id(lesson_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询课程失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(lesson_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(day) = update.day {
            model.day = Set(day.to_string());
        }

        if let Some(start_time) = update.start_time {
            model.start_time = Set(start_time.timestamp());
        }

        if let Some(end_time) = update.end_time {
            model.end_time = Set(end_time.timestamp());
        }

        if let Some(subject_id) = update.subject_id {
            model.subject_id = Set(subject_id);
        }

        if let Some(class_id) = update.class_id {
            model.class_id = Set(class_id);
        }

        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(teacher_id);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新课程失败: {e}")))?;

        Ok(Some(result.into_lesson()))
    }

    /// 删除课程
    pub async fn delete_lesson_impl(&self, lesson_id: i64) -> Result<bool> {
        let result = Lessons::delete_by_id(lesson_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

/// 课程链路展示信息（考试/作业/成绩/出勤列表共用）
#[derive(Debug, Clone, Default)]
pub(crate) struct LessonDisplay {
    pub lesson_name: String,
    pub subject_name: String,
    pub class_name: String,
    pub teacher_name: String,
}

impl SeaOrmStorage {
    /// 批量取课程及其科目/班级/教师名
    pub(crate) async fn lesson_display_map_impl<C: sea_orm::ConnectionTrait>(
        &self,
        conn: &C,
        lesson_ids: Vec<i64>,
    ) -> Result<HashMap<i64, LessonDisplay>> {
        let mut display_map: HashMap<i64, LessonDisplay> = HashMap::new();
        if lesson_ids.is_empty() {
            return Ok(display_map);
        }

        let lessons = Lessons::find()
            .filter(Column::Id.is_in(lesson_ids))
            .all(conn)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询课程失败: {e}")))?;

        let subject_ids: Vec<i64> = lessons.iter().map(|l| l.subject_id).collect();
        let class_ids: Vec<i64> = lessons.iter().map(|l| l.class_id).collect();
        let teacher_ids: Vec<i64> = lessons.iter().map(|l| l.teacher_id).collect();

        let mut subject_map: HashMap<i64, String> = HashMap::new();
        for subject in Subjects::find()
            .filter(SubjectColumn::Id.is_in(subject_ids))
            .all(conn)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询科目失败: {e}")))?
        {
            subject_map.insert(subject.id, subject.name);
        }

        let mut class_map: HashMap<i64, String> = HashMap::new();
        for class in Classes::find()
            .filter(ClassColumn::Id.is_in(class_ids))
            .all(conn)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级失败: {e}")))?
        {
            class_map.insert(class.id, class.name);
        }

        let mut teacher_map: HashMap<i64, String> = HashMap::new();
        for teacher in Teachers::find()
            .filter(TeacherColumn::Id.is_in(teacher_ids))
            .all(conn)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询教师失败: {e}")))?
        {
            teacher_map.insert(teacher.id, format!("{} {}", teacher.name, teacher.surname));
        }

        for lesson in lessons {
            display_map.insert(
                lesson.id,
                LessonDisplay {
                    lesson_name: lesson.name,
                    subject_name: subject_map
                        .get(&lesson.subject_id)
                        .cloned()
                        .unwrap_or_default(),
                    class_name: class_map.get(&lesson.class_id).cloned().unwrap_or_default(),
                    teacher_name: teacher_map
                        .get(&lesson.teacher_id)
                        .cloned()
                        .unwrap_or_default(),
                },
            );
        }

        Ok(display_map)
    }
}
