pub mod inquiry_notifier;
pub mod inquiry_repository;

pub use inquiry_notifier::{InquiryNotification, InquiryNotifier, InquiryNotifierError};
pub use inquiry_repository::{InquiryRepository, InquiryRepositoryError};
