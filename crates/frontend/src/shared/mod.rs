pub mod components;
pub mod config;
pub mod date_utils;
pub mod http;
pub mod icons;
pub mod modal;
pub mod page_title;
pub mod query;
pub mod theme;
pub mod toast;
