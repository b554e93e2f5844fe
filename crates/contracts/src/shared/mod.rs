pub mod format;
pub mod validation;
