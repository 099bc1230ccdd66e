pub mod announcements;
pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod classes;
pub mod events;
pub mod exams;
pub mod grades;
pub mod lessons;
pub mod parents;
pub mod results;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use announcements::configure_announcements_routes;
pub use assignments::configure_assignments_routes;
pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use events::configure_events_routes;
pub use exams::configure_exams_routes;
pub use grades::configure_grades_routes;
pub use lessons::configure_lessons_routes;
pub use parents::configure_parents_routes;
pub use results::configure_results_routes;
pub use students::configure_students_routes;
pub use subjects::configure_subjects_routes;
pub use teachers::configure_teachers_routes;
pub use users::configure_user_routes;
