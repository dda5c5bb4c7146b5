mod inquiry_repository_postgres;
pub mod sea_orm_entity;
mod webhook_inquiry_notifier;

pub use inquiry_repository_postgres::InquiryRepositoryPostgres;
pub use webhook_inquiry_notifier::WebhookInquiryNotifier;
