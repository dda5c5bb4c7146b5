mod list_service_packages_service;

pub use list_service_packages_service::ListServicePackagesService;
