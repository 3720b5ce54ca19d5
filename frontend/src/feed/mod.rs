pub mod app_feed;
pub mod controller;
