//! acad-cli library
//!
//! REST client for the academy back office plus the session, board and
//! distribution services the `acad` binary is built on. Exported for the
//! integration tests.

pub(crate) mod activity_commands;
pub(crate) mod admission_commands;
pub(crate) mod auth_commands;
pub mod bulk_assign;
pub mod cli;
pub(crate) mod client;
pub mod commands;
pub mod error;
pub(crate) mod fee_commands;
pub mod fees;
pub(crate) mod hr_commands;
pub mod kanban;
pub(crate) mod lead_commands;
pub mod logger;
pub(crate) mod message_commands;
pub mod messaging;
pub mod poller;
pub mod session;
pub mod submit_guard;
pub(crate) mod task_commands;

#[cfg(test)]
mod tests;

pub use client::{
    BoardScope, Client, ClientError, ClientResult, HandoverKind, LeadQuery, LoginResponse,
};
