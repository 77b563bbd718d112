#[allow(unused_imports)]
pub mod prelude {
    pub use super::attendance::Entity as Attendance;
    pub use super::communication::Entity as Communication;
    pub use super::connection_activity_type::Entity as ConnectionActivityType;
    pub use super::connection_request::Entity as ConnectionRequest;
    pub use super::connection_request_activity::Entity as ConnectionRequestActivity;
    pub use super::group::Entity as Group;
    pub use super::group_historical::Entity as GroupHistorical;
    pub use super::person::Entity as Person;
    pub use super::registration::Entity as Registration;
}

pub mod attendance;
pub mod communication;
pub mod connection_activity_type;
pub mod connection_request;
pub mod connection_request_activity;
pub mod group;
pub mod group_historical;
pub mod person;
pub mod registration;
