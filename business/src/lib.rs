//! Business layer of the Tradedesk admin client.
//!
//! A [`ResourceController`] drives list, live filter, edit and delete for one
//! of the [`resources`] against the remote REST API. [`reports`] and
//! [`api_status`] cover the read-only pages.

pub mod api;
pub mod api_status;
pub mod collaborators;
mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod record;
pub mod render;
pub mod reports;
pub mod resource;
pub mod resources;

pub use api_status::{ApiAvailability, ApiStatus, check_api_status};
pub use collaborators::{ConfirmPrompt, FixedAnswer, Notifier, TableView};
pub use config::{BusinessConfig, DEFAULT_API_BASE_URL};
pub use controller::{ActionOutcome, EditSession, ResourceController};
pub use error::{ApiError, ApiResult};
pub use record::{FormValues, Payload, Record, RecordId};
pub use render::{RenderedRow, RenderedTable, RowAction};
pub use reports::{ReportKind, ReportParams, ReportTable, fetch_report};
pub use resource::{Coercion, ColumnSpec, FieldSpec, ResourceConfig};
