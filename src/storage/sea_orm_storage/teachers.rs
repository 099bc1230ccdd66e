//! 教师存储操作

use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::classes::Entity as Classes;
use crate::entity::lessons::{Column as LessonColumn, Entity as Lessons};
use crate::entity::subject_teachers::{Column as SubjectTeacherColumn, Entity as SubjectTeachers};
use crate::entity::subjects::Entity as Subjects;
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers, Relation};
use crate::errors::{Result, SchoolSystemError};
use crate::models::common::list_query::{FilterSpec, ListQuery, build_list_query, parse_id};
use crate::models::{
    ITEMS_PER_PAGE, ListParams, PaginationInfo,
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, UpdateTeacherRequest},
        responses::{TeacherListItem, TeacherListResponse},
    },
};
use crate::utils::contains_insensitive;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

// 识别键表：classId 过滤「在该班级有课」的教师，search 模糊匹配名字
static TEACHER_FILTERS: FilterSpec = FilterSpec {
    entries: &[
        ("classId", |value| {
            parse_id(value).map(|id| Condition::all().add(LessonColumn::ClassId.eq(id)))
        }),
        ("search", |value| {
            Some(Condition::all().add(contains_insensitive(Teachers, Column::Name, value)))
        }),
    ],
};

impl SeaOrmStorage {
    /// 创建教师并关联科目
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            username: Set(req.username),
            name: Set(req.name),
            surname: Set(req.surname),
            email: Set(req.email),
            phone: Set(req.phone),
            address: Set(req.address),
            img: Set(req.img),
            blood_type: Set(req.blood_type),
            sex: Set(req.sex.to_string()),
            birthday: Set(req.birthday.timestamp()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建教师失败: {e}")))?;

        for subject_id in &req.subject_ids {
            self.set_subject_teachers_impl(&self.db, *subject_id, &[result.id])
                .await?;
        }

        Ok(result.into_teacher())
    }

    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, teacher_id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(teacher_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 分页列出教师（附带科目与班级名）
    pub async fn list_teachers_with_pagination_impl(
        &self,
        params: ListParams,
    ) -> Result<TeacherListResponse> {
        let ListQuery { filter, window } =
            build_list_query(&params, &TEACHER_FILTERS, ITEMS_PER_PAGE);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let (total, teachers) = {
            // classId 过滤条件落在 lessons 列上，左连接 + DISTINCT 防止多课次的教师重复出现
            let paginator = Teachers::find()
                .join(JoinType::LeftJoin, Relation::Lessons.def())
                .distinct()
                .filter(filter)
                .order_by_asc(Column::Id)
                .paginate(&txn, window.take);

            let total = paginator.num_items().await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询教师总数失败: {e}"))
            })?;

            let teachers = paginator.fetch_page(window.page_index()).await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询教师列表失败: {e}"))
            })?;

            (total, teachers)
        };

        let teacher_ids: Vec<i64> = teachers.iter().map(|t| t.id).collect();

        // 批量取任教科目名
        let mut subject_map: HashMap<i64, Vec<String>> = HashMap::new();
        if !teacher_ids.is_empty() {
            let links = SubjectTeachers::find()
                .filter(SubjectTeacherColumn::TeacherId.is_in(teacher_ids.clone()))
                .find_also_related(Subjects)
                .all(&txn)
                .await
                .map_err(|e| {
                    SchoolSystemError::database_operation(format!("查询任教科目失败: {e}"))
                })?;

            for (link, subject) in links {
                if let Some(subject) = subject {
                    subject_map
                        .entry(link.teacher_id)
                        .or_default()
                        .push(subject.name);
                }
            }
        }

        // 批量取授课班级名（按课程表去重）
        let mut class_map: HashMap<i64, Vec<String>> = HashMap::new();
        if !teacher_ids.is_empty() {
            let lessons = Lessons::find()
                .filter(LessonColumn::TeacherId.is_in(teacher_ids))
                .find_also_related(Classes)
                .all(&txn)
                .await
                .map_err(|e| {
                    SchoolSystemError::database_operation(format!("查询授课班级失败: {e}"))
                })?;

            let mut seen: HashSet<(i64, i64)> = HashSet::new();
            for (lesson, class) in lessons {
                if let Some(class) = class
                    && seen.insert((lesson.teacher_id, class.id))
                {
                    class_map
                        .entry(lesson.teacher_id)
                        .or_default()
                        .push(class.name);
                }
            }
        }

        txn.commit()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("提交事务失败: {e}")))?;

        let items = teachers
            .into_iter()
            .map(|model| {
                let subjects = subject_map.remove(&model.id).unwrap_or_default();
                let classes = class_map.remove(&model.id).unwrap_or_default();
                TeacherListItem {
                    teacher: model.into_teacher(),
                    subjects,
                    classes,
                }
            })
            .collect();

        Ok(TeacherListResponse {
            items,
            pagination: PaginationInfo::new(window.current_page, window.take, total),
        })
    }

    /// 更新教师
    pub async fn update_teacher_impl(
        &self,
        teacher_id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        let existing = self.get_teacher_by_id_impl(teacher_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(teacher_id),
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
            model.phone = Set(Some(phone));
        }

        if let Some(address) = update.address {
            model.address = Set(address);
        }

        if let Some(img) = update.img {
            model.img = Set(Some(img));
        }

        if let Some(blood_type) = update.blood_type {
            model.blood_type = Set(blood_type);
        }

        if let Some(sex) = update.sex {
            model.sex = Set(sex.to_string());
        }

        if let Some(birthday) = update.birthday {
            model.birthday = Set(birthday.timestamp());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新教师失败: {e}")))?;

        if let Some(subject_ids) = update.subject_ids {
            SubjectTeachers::delete_many()
                .filter(SubjectTeacherColumn::TeacherId.eq(teacher_id))
                .exec(&self.db)
                .await
                .map_err(|e| {
                    SchoolSystemError::database_operation(format!("清理任教科目关联失败: {e}"))
                })?;
            for subject_id in subject_ids {
                self.set_subject_teachers_impl(&self.db, subject_id, &[teacher_id])
                    .await?;
            }
        }

        self.get_teacher_by_id_impl(teacher_id).await
    }

    /// 删除教师（连同科目关联）
    pub async fn delete_teacher_impl(&self, teacher_id: i64) -> Result<bool> {
        SubjectTeachers::delete_many()
            .filter(SubjectTeacherColumn::TeacherId.eq(teacher_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                SchoolSystemError::database_operation(format!("清理任教科目关联失败: {e}"))
            })?;

        let result = Teachers::delete_by_id(teacher_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除教师失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
