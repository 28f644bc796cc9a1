pub mod board_move;
pub mod board_view;
pub mod task_filter;
