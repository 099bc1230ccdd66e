use std::sync::Arc;

use crate::errors::Result;
use crate::models::ListParams;
use crate::models::{
    announcements::{
        entities::Announcement,
        requests::{CreateAnnouncementRequest, UpdateAnnouncementRequest},
        responses::AnnouncementListResponse,
    },
    assignments::{
        entities::Assignment,
        requests::{CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    attendance::{
        entities::AttendanceRecord,
        requests::{CreateAttendanceRequest, UpdateAttendanceRequest},
        responses::AttendanceListResponse,
    },
    classes::{
        entities::Class,
        requests::{CreateClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
    events::{
        entities::Event,
        requests::{CreateEventRequest, UpdateEventRequest},
        responses::EventListResponse,
    },
    exams::{
        entities::Exam,
        requests::{CreateExamRequest, UpdateExamRequest},
        responses::ExamListResponse,
    },
    grades::entities::Grade,
    lessons::{
        entities::Lesson,
        requests::{CreateLessonRequest, UpdateLessonRequest},
        responses::LessonListResponse,
    },
    parents::{
        entities::Parent,
        requests::{CreateParentRequest, UpdateParentRequest},
        responses::ParentListResponse,
    },
    results::{
        entities::AssessmentResult,
        requests::{CreateResultRequest, UpdateResultRequest},
        responses::ResultListResponse,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest},
        responses::UserListResponse,
    },
};

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 登录账号管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, params: ListParams) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 年级管理方法
    // 列出所有年级（数量固定，不分页）
    async fn list_grades(&self) -> Result<Vec<Grade>>;

    /// 科目管理方法
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    async fn list_subjects_with_pagination(
        &self,
        params: ListParams,
    ) -> Result<SubjectListResponse>;
    async fn update_subject(
        &self,
        subject_id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    async fn delete_subject(&self, subject_id: i64) -> Result<bool>;

    /// 教师管理方法
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    async fn get_teacher_by_id(&self, teacher_id: i64) -> Result<Option<Teacher>>;
    async fn list_teachers_with_pagination(
        &self,
        params: ListParams,
    ) -> Result<TeacherListResponse>;
    async fn update_teacher(
        &self,
        teacher_id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>>;
    async fn delete_teacher(&self, teacher_id: i64) -> Result<bool>;

    /// 学生管理方法
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    async fn get_student_by_id(&self, student_id: i64) -> Result<Option<Student>>;
    async fn list_students_with_pagination(
        &self,
        params: ListParams,
    ) -> Result<StudentListResponse>;
    async fn update_student(
        &self,
        student_id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    async fn delete_student(&self, student_id: i64) -> Result<bool>;

    /// 家长管理方法
    async fn create_parent(&self, parent: CreateParentRequest) -> Result<Parent>;
    async fn list_parents_with_pagination(&self, params: ListParams)
    -> Result<ParentListResponse>;
    async fn update_parent(
        &self,
        parent_id: i64,
        update: UpdateParentRequest,
    ) -> Result<Option<Parent>>;
    async fn delete_parent(&self, parent_id: i64) -> Result<bool>;

    /// 班级管理方法
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    async fn list_classes_with_pagination(&self, params: ListParams)
    -> Result<ClassListResponse>;
    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>>;
    async fn delete_class(&self, class_id: i64) -> Result<bool>;

    /// 课程管理方法
    async fn create_lesson(&self, lesson: CreateLessonRequest) -> Result<Lesson>;
    async fn list_lessons_with_pagination(&self, params: ListParams)
    -> Result<LessonListResponse>;
    async fn update_lesson(
        &self,
        lesson_id: i64,
        update: UpdateLessonRequest,
    ) -> Result<Option<Lesson>>;
    async fn delete_lesson(&self, lesson_id: i64) -> Result<bool>;

    /// 考试管理方法
    async fn create_exam(&self, exam: CreateExamRequest) -> Result<Exam>;
    async fn list_exams_with_pagination(&self, params: ListParams) -> Result<ExamListResponse>;
    async fn update_exam(&self, exam_id: i64, update: UpdateExamRequest) -> Result<Option<Exam>>;
    async fn delete_exam(&self, exam_id: i64) -> Result<bool>;

    /// 作业管理方法
    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment>;
    async fn list_assignments_with_pagination(
        &self,
        params: ListParams,
    ) -> Result<AssignmentListResponse>;
    async fn update_assignment(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool>;

    /// 成绩管理方法
    async fn create_result(&self, result: CreateResultRequest) -> Result<AssessmentResult>;
    async fn list_results_with_pagination(&self, params: ListParams)
    -> Result<ResultListResponse>;
    async fn update_result(
        &self,
        result_id: i64,
        update: UpdateResultRequest,
    ) -> Result<Option<AssessmentResult>>;
    async fn delete_result(&self, result_id: i64) -> Result<bool>;

    /// 出勤管理方法
    async fn create_attendance(&self, record: CreateAttendanceRequest)
    -> Result<AttendanceRecord>;
    async fn list_attendance_with_pagination(
        &self,
        params: ListParams,
    ) -> Result<AttendanceListResponse>;
    async fn update_attendance(
        &self,
        record_id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<AttendanceRecord>>;
    async fn delete_attendance(&self, record_id: i64) -> Result<bool>;

    /// 活动管理方法
    async fn create_event(&self, event: CreateEventRequest) -> Result<Event>;
    async fn list_events_with_pagination(&self, params: ListParams) -> Result<EventListResponse>;
    async fn update_event(
        &self,
        event_id: i64,
        update: UpdateEventRequest,
    ) -> Result<Option<Event>>;
    async fn delete_event(&self, event_id: i64) -> Result<bool>;

    /// 公告管理方法
    async fn create_announcement(
        &self,
        announcement: CreateAnnouncementRequest,
    ) -> Result<Announcement>;
    async fn list_announcements_with_pagination(
        &self,
        params: ListParams,
    ) -> Result<AnnouncementListResponse>;
    async fn update_announcement(
        &self,
        announcement_id: i64,
        update: UpdateAnnouncementRequest,
    ) -> Result<Option<Announcement>>;
    async fn delete_announcement(&self, announcement_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
