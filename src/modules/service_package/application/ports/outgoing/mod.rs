pub mod service_package_query;

pub use service_package_query::{ServicePackageQuery, ServicePackageQueryError};
