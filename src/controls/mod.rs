//! Server-rendered form controls and the view state they carry between
//! requests.

pub mod dropdown;
pub mod validator;
pub mod view_state;

pub use dropdown::{DropDownList, ListItem};
pub use validator::RequiredFieldValidator;
pub use view_state::{ItemAttributeState, ViewStateError};
