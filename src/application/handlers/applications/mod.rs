//! Application registry command and query handlers.

mod list_applications;
mod register_application;

pub use list_applications::ListApplicationsHandler;
pub use register_application::{RegisterApplicationCommand, RegisterApplicationHandler};
