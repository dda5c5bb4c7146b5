pub mod list_service_packages;

pub use list_service_packages::*;
