pub mod article;
pub mod faq;
pub mod outline;
