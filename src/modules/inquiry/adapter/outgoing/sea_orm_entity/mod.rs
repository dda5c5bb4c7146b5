pub mod website_inquiries;
