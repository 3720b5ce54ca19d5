pub mod app_mail;
pub mod controller;
