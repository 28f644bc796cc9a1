pub mod admission_target;
pub mod application_status;
pub mod board_column;
pub mod course;
pub mod lead;
pub mod lead_status;
pub mod leave_application;
pub mod message;
pub mod role;
pub mod student_due;
pub mod task;
pub mod task_priority;
pub mod task_tag;
pub mod user;
