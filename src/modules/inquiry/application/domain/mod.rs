pub mod entities;
pub mod submission;

pub use entities::{Inquiry, InquiryStatus};
pub use submission::{InquiryForm, SubmitInquiryCommand, SubmitInquiryCommandError};
