pub const APP_NAME: &str = "pizza.shop";

pub fn format_title(page: &str) -> String {
    format!("{} | {}", page, APP_NAME)
}

/// Set `document.title` for the current page
pub fn set_page_title(page: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&format_title(page));
    }
}
