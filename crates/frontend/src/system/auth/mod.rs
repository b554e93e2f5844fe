pub mod api;
pub mod flash;
pub mod storage;
