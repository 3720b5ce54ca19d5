pub mod app_notice;
