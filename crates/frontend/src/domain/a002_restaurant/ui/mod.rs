pub mod account_menu;
pub mod store_profile_dialog;
