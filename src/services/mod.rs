pub mod connection_service;
pub mod context;
pub mod delete_guard;
pub mod group_service;
pub mod record_copy;

pub use connection_service::ConnectionService;
pub use context::ServiceContext;
pub use group_service::GroupService;
pub use delete_guard::{Deletability, DeleteGuardService};
pub use record_copy::{CopyDepth, RecordCopy};
