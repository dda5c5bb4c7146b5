pub mod service_packages;
