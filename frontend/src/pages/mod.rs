pub mod about;
pub mod admin;
pub mod admin_editor;
pub mod contact;
pub mod home;
pub mod lawyer_detail;
pub mod lawyers;
pub mod login;
pub mod news;
pub mod news_detail;
pub mod not_found;
pub mod service_detail;
pub mod services;
