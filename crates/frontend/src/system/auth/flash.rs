use leptos::prelude::*;

use super::storage;
use crate::shared::toast::{use_toast, Toast};

pub const SESSION_EXPIRED_TOAST_ID: &str = "session-expired";

/// Show the "session expired" warning once after a forced redirect
pub fn use_flash_message() {
    let toast = use_toast();

    Effect::new(move |_| {
        if storage::take_auth_error_flag() {
            log::info!("Showing session expired notice");
            toast.show(
                Toast::warning("Sessão expirada")
                    .description("Por favor, faça login novamente.")
                    .dedup(SESSION_EXPIRED_TOAST_ID),
            );
        }
    });
}
