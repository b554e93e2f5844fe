//! Colour theme of the dashboard
//!
//! The choice is kept in localStorage and applied as a `dark`/`light` class
//! on the document root. `System` follows the OS colour scheme.

use leptos::prelude::*;
use web_sys::window;

use crate::shared::icons::icon;

const THEME_STORAGE_KEY: &str = "pizzashop-theme";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    System,
}

impl Theme {
    /// Stored value
    pub fn code(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::System => "system",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Dark => "Escuro",
            Theme::Light => "Claro",
            Theme::System => "Sistema",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Theme::Dark => "moon",
            Theme::Light => "sun",
            Theme::System => "monitor",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }

    pub fn all() -> [Theme; 3] {
        [Theme::Light, Theme::Dark, Theme::System]
    }

    /// Class put on the root element
    pub fn root_class(&self, prefers_dark: bool) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::System if prefers_dark => "dark",
            Theme::System => "light",
        }
    }
}

/// Unknown or missing values fall back to the default
fn load_theme() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .and_then(|code| Theme::from_code(&code))
        .unwrap_or_default()
}

fn save_theme(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Err(e) = storage.set_item(THEME_STORAGE_KEY, theme.code()) {
            log::warn!("Failed to persist theme: {:?}", e);
        }
    }
}

fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn apply_theme(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let _ = classes.remove_2("dark", "light");
    let _ = classes.add_1(theme.root_class(prefers_dark()));
    let _ = root.set_attribute("data-theme", theme.code());
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Persist and apply
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme(theme);
        apply_theme(theme);
    }
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial = load_theme();
    apply_theme(initial);
    provide_context(ThemeContext {
        theme: RwSignal::new(initial),
    });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Header button with the theme choices
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();
    let is_open = RwSignal::new(false);

    let select = move |theme: Theme| {
        ctx.set_theme(theme);
        is_open.set(false);
    };

    view! {
        <div class="theme-toggle">
            <button
                class="theme-toggle__trigger"
                title="Alternar tema"
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                {move || icon(ctx.theme.get().icon_name())}
            </button>

            <Show when=move || is_open.get()>
                <div class="theme-toggle__menu">
                    {Theme::all()
                        .into_iter()
                        .map(|theme| {
                            let class = move || {
                                if ctx.theme.get() == theme {
                                    "theme-toggle__item theme-toggle__item--active"
                                } else {
                                    "theme-toggle__item"
                                }
                            };
                            view! {
                                <button class=class on:click=move |_| select(theme)>
                                    {icon(theme.icon_name())}
                                    <span>{theme.display_name()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
