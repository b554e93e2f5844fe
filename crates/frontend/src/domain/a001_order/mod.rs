pub mod api;
pub mod cache;
pub mod hooks;
pub mod ui;
