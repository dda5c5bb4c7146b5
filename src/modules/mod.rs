pub mod blog;
pub mod calculator;
pub mod inquiry;
pub mod portfolio;
pub mod service_package;
pub mod settings;
pub mod site;
