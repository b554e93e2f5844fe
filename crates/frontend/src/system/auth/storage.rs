use web_sys::window;

/// Set before the hard redirect to /sign-in, consumed once by the sign-in page
pub const AUTH_ERROR_KEY: &str = "@pizzashop:auth-error";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Remember that the session expired
pub fn set_auth_error_flag() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(AUTH_ERROR_KEY, "true");
    }
}

/// Read and clear the session-expired flag
pub fn take_auth_error_flag() -> bool {
    let Some(storage) = get_local_storage() else {
        return false;
    };
    match storage.get_item(AUTH_ERROR_KEY) {
        Ok(Some(_)) => {
            let _ = storage.remove_item(AUTH_ERROR_KEY);
            true
        }
        _ => false,
    }
}
