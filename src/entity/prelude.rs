pub use super::announcements::Entity as Announcements;
pub use super::assignments::Entity as Assignments;
pub use super::attendance::Entity as Attendance;
pub use super::classes::Entity as Classes;
pub use super::events::Entity as Events;
pub use super::exams::Entity as Exams;
pub use super::grades::Entity as Grades;
pub use super::lessons::Entity as Lessons;
pub use super::parents::Entity as Parents;
pub use super::results::Entity as Results;
pub use super::students::Entity as Students;
pub use super::subject_teachers::Entity as SubjectTeachers;
pub use super::subjects::Entity as Subjects;
pub use super::teachers::Entity as Teachers;
pub use super::users::Entity as Users;
