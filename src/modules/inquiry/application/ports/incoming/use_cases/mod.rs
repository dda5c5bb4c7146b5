pub mod submit_inquiry;

pub use submit_inquiry::*;
