mod board_column;
mod lead_status;
mod role;
mod task;
mod user_ref;
