pub(crate) mod admissions_api;
pub(crate) mod auth_api;
pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod fees_api;
pub(crate) mod hr_api;
pub(crate) mod leads_api;
pub(crate) mod messaging_api;
pub(crate) mod tasks_api;

pub use auth_api::LoginResponse;
pub use client::Client;
pub use error::{ClientError, Result as ClientResult};
pub use hr_api::HandoverKind;
pub use leads_api::LeadQuery;
pub use tasks_api::BoardScope;
