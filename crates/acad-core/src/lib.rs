pub mod board;
pub mod distribution;
pub mod error;
pub mod export;
pub mod forms;
pub mod models;

#[cfg(test)]
mod tests;

pub use board::board_move::{
    BoardPositionUpdate, MOVED_TASK_POSITION, MoveDecision, plan_move,
};
pub use board::board_view::{BoardLane, group_by_column};
pub use board::task_filter::TaskFilter;
pub use distribution::{
    DistributionPlan, EMPTY_SELECTION_MESSAGE, MemberShare, plan_equal_distribution,
};
pub use error::{CoreError, Result};
pub use export::csv_report::{CsvReport, escape_field};
pub use export::reports::{admission_metrics_report, json_rows_report, tasks_report};
pub use forms::admission_target_form::AdmissionTargetForm;
pub use forms::batch_form::BatchForm;
pub use forms::lead_form::{LeadStatusUpdate, NewLead};
pub use forms::leave_request::{LeaveRequest, RecruitmentIncomeForm, TadaRequest};
pub use forms::payment_collection::{
    FeeFollowUpForm, PaymentCollection, validate_collection_amount,
};
pub use forms::task_assignment::{ChecklistDraft, TaskAssignment, TaskUpdate};
pub use models::admission_target::{AdmissionMetric, AdmissionTarget};
pub use models::application_status::{ApplicationStatus, HandoverStatus};
pub use models::board_column::BoardColumn;
pub use models::course::{Batch, Course};
pub use models::lead::{Lead, LeadFollowUp};
pub use models::lead_status::LeadStatus;
pub use models::leave_application::{LeaveApplication, RecruitmentIncome, TadaApplication};
pub use models::message::{ActivityLog, Conversation, Message, Notification};
pub use models::role::Role;
pub use models::student_due::{FeeFollowUp, PaymentRecord, StudentDue};
pub use models::task::{Attachment, ChecklistItem, Task, TaskComment};
pub use models::task_priority::TaskPriority;
pub use models::task_tag::TaskTag;
pub use models::user::{User, UserRef};
