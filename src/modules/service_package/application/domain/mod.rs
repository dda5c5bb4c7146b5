pub mod entities;

pub use entities::ServicePackage;
