mod get_service_packages;

pub use get_service_packages::*;
