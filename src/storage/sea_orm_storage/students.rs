//! 学生存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::classes::{Entity as Classes, Relation as ClassRelation};
use crate::entity::grades::Entity as Grades;
use crate::entity::lessons::Column as LessonColumn;
use crate::entity::students::{ActiveModel, Column, Entity as Students, Relation};
use crate::errors::{Result, SchoolSystemError};
use crate::models::common::list_query::{FilterSpec, ListQuery, build_list_query, parse_id};
use crate::models::{
    ITEMS_PER_PAGE, ListParams, PaginationInfo,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, UpdateStudentRequest},
        responses::{StudentListItem, StudentListResponse},
    },
};
use crate::utils::contains_insensitive;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

// 识别键表：teacherId 过滤「所在班级有该教师课程」的学生，search 模糊匹配名字
static STUDENT_FILTERS: FilterSpec = FilterSpec {
    entries: &[
        ("teacherId", |value| {
            parse_id(value).map(|id| Condition::all().add(LessonColumn::TeacherId.eq(id)))
        }),
        ("search", |value| {
            Some(Condition::all().add(contains_insensitive(Students, Column::Name, value)))
        }),
    ],
};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
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
            class_id: Set(req.class_id),
            grade_id: Set(req.grade_id),
            parent_id: Set(req.parent_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, student_id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生（附带班级名与年级）
    pub async fn list_students_with_pagination_impl(
        &self,
        params: ListParams,
    ) -> Result<StudentListResponse> {
        let ListQuery { filter, window } =
            build_list_query(&params, &STUDENT_FILTERS, ITEMS_PER_PAGE);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let (total, students) = {
            // teacherId 过滤经过 班级 -> 课程 两层关系，左连接 + DISTINCT 去掉重复行
            let paginator = Students::find()
                .join(JoinType::LeftJoin, Relation::Class.def())
                .join(JoinType::LeftJoin, ClassRelation::Lessons.def())
                .distinct()
                .filter(filter)
                .order_by_asc(Column::Id)
                .paginate(&txn, window.take);

            let total = paginator.num_items().await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询学生总数失败: {e}"))
            })?;

            let students = paginator.fetch_page(window.page_index()).await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询学生列表失败: {e}"))
            })?;

            (total, students)
        };

        // 批量取班级名与年级
        let class_ids: Vec<i64> = students.iter().map(|s| s.class_id).collect();
        let mut class_map: HashMap<i64, (String, i32)> = HashMap::new();
        if !class_ids.is_empty() {
            let classes = Classes::find()
                .filter(crate::entity::classes::Column::Id.is_in(class_ids))
                .find_also_related(Grades)
                .all(&txn)
                .await
                .map_err(|e| {
                    SchoolSystemError::database_operation(format!("查询班级信息失败: {e}"))
                })?;

            for (class, grade) in classes {
                let level = grade.map(|g| g.level).unwrap_or_default();
                class_map.insert(class.id, (class.name, level));
            }
        }

        txn.commit()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("提交事务失败: {e}")))?;

        let items = students
            .into_iter()
            .map(|model| {
                let (class_name, grade_level) =
                    class_map.get(&model.class_id).cloned().unwrap_or_default();
                StudentListItem {
                    student: model.into_student(),
                    class_name,
                    grade_level,
                }
            })
            .collect();

        Ok(StudentListResponse {
            items,
            pagination: PaginationInfo::new(window.current_page, window.take, total),
        })
    }

    /// 更新学生
    pub async fn update_student_impl(
        &self,
        student_id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let existing = self.get_student_by_id_impl(student_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(student_id),
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

        if let Some(class_id) = update.class_id {
            model.class_id = Set(class_id);
        }

        if let Some(grade_id) = update.grade_id {
            model.grade_id = Set(grade_id);
        }

        if let Some(parent_id) = update.parent_id {
            model.parent_id = Set(parent_id);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新学生失败: {e}")))?;

        self.get_student_by_id_impl(student_id).await
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, student_id: i64) -> Result<bool> {
        let result = Students::delete_by_id(student_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
