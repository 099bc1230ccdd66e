//! 数据填充
//!
//! 生成一套贴近真实的 K-12 数据集：年级、科目、师生家长、班级、
//! 课程表以及考试/作业/成绩/出勤/活动/公告。
//! 大表按批写入，批次间固定停顿 100ms，避免瞬时压垮存储。

use chrono::{TimeZone, Utc};
use rand::Rng;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use tracing::info;

use crate::entity::prelude::*;
use crate::entity::{
    announcements, assignments, attendance, classes, events, exams, grades, lessons, parents,
    results, students, subject_teachers, subjects, teachers, users,
};
use crate::errors::{Result, SchoolSystemError};
use crate::models::users::entities::{UserRole, UserStatus};
use crate::storage::sea_orm_storage::SeaOrmStorage;
use crate::utils::password::hash_password;

const SEED_BATCH_SIZE: usize = 50;
const BATCH_PAUSE_MS: u64 = 100;

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa", "Anthony", "Betty", "Mark",
    "Margaret", "Paul", "Sandra", "Steven", "Ashley", "Andrew", "Kimberly", "Kenneth", "Emily",
    "Joshua", "Donna", "Kevin", "Michelle",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores",
];

const STREET_NAMES: &[&str] = &[
    "Maple Street", "Oak Avenue", "Cedar Lane", "Elm Drive", "Pine Road", "Washington Boulevard",
    "Lincoln Avenue", "Park Street", "Lake Drive", "Hillcrest Road", "Sunset Boulevard",
    "River Road", "Church Street", "Main Street", "Highland Avenue",
];

const BLOOD_TYPES: &[&str] = &["A+", "A-", "B+", "B-", "O+", "O-", "AB+", "AB-"];

const SEXES: &[&str] = &["MALE", "FEMALE"];

const WEEK_DAYS: &[&str] = &["MONDAY", "TUESDAY", "WEDNESDAY", "THURSDAY", "FRIDAY"];

// 科目表（小学/初中/高中合并去重后的全集）
const SUBJECT_NAMES: &[&str] = &[
    "Reading",
    "Writing",
    "Mathematics",
    "Science",
    "Social Studies",
    "Art",
    "Music",
    "Physical Education",
    "English Language Arts",
    "Life Science",
    "Earth Science",
    "World History",
    "Computer Science",
    "English Literature",
    "Advanced Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "Economics",
    "Foreign Language",
    "Art History",
    "Music Theory",
];

const ADJECTIVES: &[&str] = &[
    "Challenging", "Comprehensive", "Creative", "Essential", "Final", "Midterm", "Practical",
    "Standard", "Weekly", "Advanced",
];

const EVENT_TITLES: &[&str] = &[
    "Parent-Teacher Conference",
    "Science Fair",
    "Sports Day",
    "Art Exhibition",
    "Annual Day",
    "Career Guidance Session",
    "Cultural Festival",
    "Field Trip",
    "Book Fair",
    "Math Olympics",
    "Drama Performance",
    "Music Concert",
    "Poetry Reading",
    "Technology Showcase",
    "Environmental Awareness Day",
];

const ANNOUNCEMENT_TITLES: &[&str] = &[
    "Important Notice",
    "Schedule Change",
    "Upcoming Event",
    "Holiday Announcement",
    "Exam Schedule",
    "Parent Meeting",
    "Curriculum Update",
    "School Policy Change",
    "Facility Maintenance",
    "Weather Advisory",
    "Transportation Update",
    "Lunch Menu Change",
    "After-School Program",
    "School Spirit Week",
    "Community Service Opportunity",
];

const LOREM_SENTENCES: &[&str] = &[
    "Please check the school portal for the full details.",
    "All students and parents are encouraged to participate.",
    "Contact the front office with any questions.",
    "Further information will be shared by the class supervisor.",
    "Attendance will be taken at the beginning of the session.",
];

fn pick<'a, T>(rng: &mut impl Rng, pool: &'a [T]) -> &'a T {
    &pool[rng.random_range(0..pool.len())]
}

/// 随机生日：落在 [from_year, to_year] 区间内
fn random_birthday(rng: &mut impl Rng, from_year: i32, to_year: i32) -> i64 {
    let year = rng.random_range(from_year..=to_year);
    let month = rng.random_range(1..=12);
    let day = rng.random_range(1..=28);
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .map(|dt| dt.timestamp())
        .unwrap_or_default()
}

/// 随机上课时间：2024-01-01 的 [start_hour, end_hour] 区间
fn random_lesson_time(rng: &mut impl Rng, start_hour: u32, end_hour: u32) -> i64 {
    let hour = rng.random_range(start_hour..=end_hour);
    let minute = rng.random_range(0..60);
    Utc.with_ymd_and_hms(2024, 1, 1, hour, minute, 0)
        .single()
        .map(|dt| dt.timestamp())
        .unwrap_or_default()
}

/// 未来随机时刻（1~60 天内）
fn future_ts(rng: &mut impl Rng, now: i64) -> i64 {
    now + rng.random_range(1..=60) * 86_400 + rng.random_range(0..86_400)
}

/// 近期随机时刻（最近 days 天内）
fn recent_ts(rng: &mut impl Rng, now: i64, days: i64) -> i64 {
    now - rng.random_range(0..days) * 86_400 - rng.random_range(0..86_400)
}

fn description(rng: &mut impl Rng) -> String {
    format!(
        "{} {}",
        pick(rng, LOREM_SENTENCES),
        pick(rng, LOREM_SENTENCES)
    )
}

/// 清空所有业务表（按外键依赖逆序）
async fn clear_database(db: &DatabaseConnection) -> Result<()> {
    info!("🧹 Cleaning database...");

    Attendance::delete_many().exec(db).await?;
    Results::delete_many().exec(db).await?;
    Exams::delete_many().exec(db).await?;
    Assignments::delete_many().exec(db).await?;
    Announcements::delete_many().exec(db).await?;
    Events::delete_many().exec(db).await?;
    Lessons::delete_many().exec(db).await?;
    Students::delete_many().exec(db).await?;
    Classes::delete_many().exec(db).await?;
    SubjectTeachers::delete_many().exec(db).await?;
    Teachers::delete_many().exec(db).await?;
    Subjects::delete_many().exec(db).await?;
    Parents::delete_many().exec(db).await?;
    Grades::delete_many().exec(db).await?;
    Users::delete_many().exec(db).await?;

    Ok(())
}

/// 填充入口
pub async fn run() -> Result<()> {
    let storage = SeaOrmStorage::new_async().await?;
    let db = storage.db.clone();
    let mut rng = rand::rng();
    let now = Utc::now().timestamp();

    clear_database(&db).await?;
    info!("🌱 Starting seeding...");

    // 管理员登录账号
    let admin_password =
        std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "ChangeMe-123".to_string());
    let password_hash = hash_password(&admin_password)?;
    for i in 1..=5 {
        users::ActiveModel {
            username: Set(format!("admin{i}")),
            email: Set(format!("admin{i}@school.local")),
            password_hash: Set(password_hash.clone()),
            role: Set(UserRole::Admin.to_string()),
            status: Set(UserStatus::Active.to_string()),
            display_name: Set(Some(format!("Administrator {i}"))),
            avatar_url: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await?;
    }
    info!("✓ Created admins: 5");

    // 年级（0 代表幼儿园）
    let mut grade_ids = Vec::new();
    for level in 0..=12 {
        let grade = grades::ActiveModel {
            level: Set(level),
            ..Default::default()
        }
        .insert(&db)
        .await?;
        grade_ids.push((grade.id, level));
    }
    info!("✓ Created grades: {}", grade_ids.len());

    // 科目
    let mut subject_ids = Vec::new();
    for name in SUBJECT_NAMES {
        let subject = subjects::ActiveModel {
            name: Set(name.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await?;
        subject_ids.push(subject.id);
    }
    info!("✓ Created subjects: {}", subject_ids.len());

    // 教师（每人随机关联一个科目）
    let mut teacher_ids = Vec::new();
    for i in 0..60 {
        let name = *pick(&mut rng, FIRST_NAMES);
        let surname = *pick(&mut rng, LAST_NAMES);
        let teacher = teachers::ActiveModel {
            username: Set(format!("{}.{}{}", name.to_lowercase(), surname.to_lowercase(), i)),
            name: Set(name.to_string()),
            surname: Set(surname.to_string()),
            email: Set(Some(format!(
                "{}.{}{}@school.local",
                name.to_lowercase(),
                surname.to_lowercase(),
                i
            ))),
            phone: Set(Some(format!("+1555{:07}", 1_000_000 + i))),
            address: Set(format!(
                "{} {}",
                rng.random_range(1..2000),
                pick(&mut rng, STREET_NAMES)
            )),
            img: Set(None),
            blood_type: Set(pick(&mut rng, BLOOD_TYPES).to_string()),
            sex: Set(pick(&mut rng, SEXES).to_string()),
            birthday: Set(random_birthday(&mut rng, 1970, 1995)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        subject_teachers::ActiveModel {
            subject_id: Set(*pick(&mut rng, &subject_ids)),
            teacher_id: Set(teacher.id),
        }
        .insert(&db)
        .await?;

        teacher_ids.push(teacher.id);
    }
    info!("✓ Created teachers: {}", teacher_ids.len());

    // 班级（K-5 每级 2 个班，6-12 每级 3 个班）
    let mut class_ids = Vec::new();
    for (grade_id, level) in &grade_ids {
        let sections = if *level <= 5 { 2 } else { 3 };
        for section in 0..sections {
            let section_letter = (b'A' + section) as char;
            let grade_name = if *level == 0 {
                "K".to_string()
            } else {
                level.to_string()
            };
            let class = classes::ActiveModel {
                name: Set(format!("{grade_name}{section_letter}")),
                capacity: Set(rng.random_range(20..=30)),
                grade_id: Set(*grade_id),
                supervisor_id: Set(Some(*pick(&mut rng, &teacher_ids))),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&db)
            .await?;
            class_ids.push((class.id, *grade_id));
        }
    }
    info!("✓ Created classes: {}", class_ids.len());

    // 家长（批量写入）
    let parent_models: Vec<parents::ActiveModel> = (0..400)
        .map(|i| {
            let name = *pick(&mut rng, FIRST_NAMES);
            let surname = *pick(&mut rng, LAST_NAMES);
            parents::ActiveModel {
                username: Set(format!(
                    "{}.{}{}",
                    name.to_lowercase(),
                    surname.to_lowercase(),
                    i
                )),
                name: Set(name.to_string()),
                surname: Set(surname.to_string()),
                email: Set(Some(format!(
                    "{}.{}{}@example.com",
                    name.to_lowercase(),
                    surname.to_lowercase(),
                    i
                ))),
                phone: Set(format!("+1555{:07}", 2_000_000 + i)),
                address: Set(format!(
                    "{} {}",
                    rng.random_range(1..2000),
                    pick(&mut rng, STREET_NAMES)
                )),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
        })
        .collect();
    insert_parents_in_batches(&db, parent_models).await?;
    let parent_ids: Vec<i64> = Parents::find()
        .all(&db)
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();
    info!("✓ Created parents: {}", parent_ids.len());

    // 学生（批量写入）
    let student_models: Vec<students::ActiveModel> = (0..700)
        .map(|i| {
            let name = *pick(&mut rng, FIRST_NAMES);
            let surname = *pick(&mut rng, LAST_NAMES);
            let (class_id, grade_id) = *pick(&mut rng, &class_ids);
            students::ActiveModel {
                username: Set(format!(
                    "{}.{}.s{}",
                    name.to_lowercase(),
                    surname.to_lowercase(),
                    i
                )),
                name: Set(name.to_string()),
                surname: Set(surname.to_string()),
                email: Set(Some(format!(
                    "{}.{}.s{}@school.local",
                    name.to_lowercase(),
                    surname.to_lowercase(),
                    i
                ))),
                phone: Set(Some(format!("+1555{:07}", 3_000_000 + i))),
                address: Set(format!(
                    "{} {}",
                    rng.random_range(1..2000),
                    pick(&mut rng, STREET_NAMES)
                )),
                img: Set(None),
                blood_type: Set(pick(&mut rng, BLOOD_TYPES).to_string()),
                sex: Set(pick(&mut rng, SEXES).to_string()),
                birthday: Set(random_birthday(&mut rng, 2006, 2019)),
                class_id: Set(class_id),
                grade_id: Set(grade_id),
                parent_id: Set(*pick(&mut rng, &parent_ids)),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
        })
        .collect();
    insert_students_in_batches(&db, student_models).await?;
    let student_ids: Vec<i64> = Students::find()
        .all(&db)
        .await?
        .into_iter()
        .map(|s| s.id)
        .collect();
    info!("✓ Created students: {}", student_ids.len());

    // 课程
    let subject_names: Vec<(i64, String)> = Subjects::find()
        .all(&db)
        .await?
        .into_iter()
        .map(|s| (s.id, s.name))
        .collect();
    let class_names: Vec<(i64, String)> = Classes::find()
        .all(&db)
        .await?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();

    let mut lesson_ids = Vec::new();
    for _ in 0..200 {
        let (subject_id, subject_name) = pick(&mut rng, &subject_names).clone();
        let (class_id, class_name) = pick(&mut rng, &class_names).clone();
        let lesson = lessons::ActiveModel {
            name: Set(format!("{subject_name} {class_name}")),
            day: Set(pick(&mut rng, WEEK_DAYS).to_string()),
            start_time: Set(random_lesson_time(&mut rng, 8, 15)),
            end_time: Set(random_lesson_time(&mut rng, 9, 16)),
            subject_id: Set(subject_id),
            class_id: Set(class_id),
            teacher_id: Set(*pick(&mut rng, &teacher_ids)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await?;
        lesson_ids.push((lesson.id, lesson.name));
    }
    info!("✓ Created lessons: {}", lesson_ids.len());

    // 考试
    let mut exam_ids = Vec::new();
    for _ in 0..100 {
        let (lesson_id, lesson_name) = pick(&mut rng, &lesson_ids).clone();
        let start = future_ts(&mut rng, now);
        let exam = exams::ActiveModel {
            title: Set(format!("{} {} Exam", pick(&mut rng, ADJECTIVES), lesson_name)),
            start_time: Set(start),
            end_time: Set(start + 2 * 3600),
            lesson_id: Set(lesson_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await?;
        exam_ids.push(exam.id);
    }
    info!("✓ Created exams: {}", exam_ids.len());

    // 作业
    let mut assignment_ids = Vec::new();
    for _ in 0..150 {
        let (lesson_id, lesson_name) = pick(&mut rng, &lesson_ids).clone();
        let start = future_ts(&mut rng, now);
        let assignment = assignments::ActiveModel {
            title: Set(format!(
                "{} {} Assignment",
                pick(&mut rng, ADJECTIVES),
                lesson_name
            )),
            start_date: Set(start),
            due_date: Set(start + 7 * 86_400),
            lesson_id: Set(lesson_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await?;
        assignment_ids.push(assignment.id);
    }
    info!("✓ Created assignments: {}", assignment_ids.len());

    // 成绩（批量写入；考试或作业二选一）
    let result_models: Vec<results::ActiveModel> = (0..1000)
        .map(|_| {
            let is_exam = rng.random_bool(0.5);
            results::ActiveModel {
                score: Set(rng.random_range(0..=100)),
                exam_id: Set(is_exam.then(|| *pick(&mut rng, &exam_ids))),
                assignment_id: Set((!is_exam).then(|| *pick(&mut rng, &assignment_ids))),
                student_id: Set(*pick(&mut rng, &student_ids)),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
        })
        .collect();
    insert_results_in_batches(&db, result_models).await?;
    info!("✓ Created results: 1000");

    // 出勤（批量写入，约 90% 出勤率）
    let attendance_models: Vec<attendance::ActiveModel> = (0..2000)
        .map(|_| attendance::ActiveModel {
            date: Set(recent_ts(&mut rng, now, 30)),
            present: Set(rng.random_bool(0.9)),
            student_id: Set(*pick(&mut rng, &student_ids)),
            lesson_id: Set(pick(&mut rng, &lesson_ids).0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .collect();
    insert_attendance_in_batches(&db, attendance_models).await?;
    info!("✓ Created attendance records: 2000");

    // 活动
    for _ in 0..30 {
        let start = future_ts(&mut rng, now);
        events::ActiveModel {
            title: Set(pick(&mut rng, EVENT_TITLES).to_string()),
            description: Set(description(&mut rng)),
            start_time: Set(start),
            end_time: Set(start + 3 * 3600),
            class_id: Set(Some(pick(&mut rng, &class_ids).0)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await?;
    }
    info!("✓ Created events: 30");

    // 公告
    for _ in 0..50 {
        announcements::ActiveModel {
            title: Set(pick(&mut rng, ANNOUNCEMENT_TITLES).to_string()),
            description: Set(description(&mut rng)),
            date: Set(recent_ts(&mut rng, now, 10)),
            class_id: Set(Some(pick(&mut rng, &class_ids).0)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await?;
    }
    info!("✓ Created announcements: 50");

    info!("✨ Seeding completed successfully!");
    Ok(())
}

async fn pause_between_batches() {
    tokio::time::sleep(std::time::Duration::from_millis(BATCH_PAUSE_MS)).await;
}

async fn insert_parents_in_batches(
    db: &DatabaseConnection,
    models: Vec<parents::ActiveModel>,
) -> Result<()> {
    for chunk in models.chunks(SEED_BATCH_SIZE) {
        Parents::insert_many(chunk.to_vec())
            .exec(db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("写入家长批次失败: {e}")))?;
        pause_between_batches().await;
    }
    Ok(())
}

async fn insert_students_in_batches(
    db: &DatabaseConnection,
    models: Vec<students::ActiveModel>,
) -> Result<()> {
    for chunk in models.chunks(SEED_BATCH_SIZE) {
        Students::insert_many(chunk.to_vec())
            .exec(db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("写入学生批次失败: {e}")))?;
        pause_between_batches().await;
    }
    Ok(())
}

async fn insert_results_in_batches(
    db: &DatabaseConnection,
    models: Vec<results::ActiveModel>,
) -> Result<()> {
    for chunk in models.chunks(SEED_BATCH_SIZE) {
        Results::insert_many(chunk.to_vec())
            .exec(db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("写入成绩批次失败: {e}")))?;
        pause_between_batches().await;
    }
    Ok(())
}

async fn insert_attendance_in_batches(
    db: &DatabaseConnection,
    models: Vec<attendance::ActiveModel>,
) -> Result<()> {
    for chunk in models.chunks(SEED_BATCH_SIZE) {
        Attendance::insert_many(chunk.to_vec())
            .exec(db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("写入出勤批次失败: {e}")))?;
        pause_between_batches().await;
    }
    Ok(())
}
