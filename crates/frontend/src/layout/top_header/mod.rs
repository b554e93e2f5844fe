//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Brand icon
//! - Navigation links
//! - Theme toggle
//! - Account menu of the signed-in manager

mod nav_link;

use crate::domain::a002_restaurant::ui::account_menu::AccountMenu;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;
use nav_link::NavLink;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("pizza")}
                <span class="top-header__separator"></span>
            </div>

            <nav class="top-header__nav">
                <NavLink href="/" icon_name="home" label="Início" />
                <NavLink href="/orders" icon_name="utensils" label="Pedidos" />
            </nav>

            <div class="top-header__actions">
                <ThemeToggle />
                <AccountMenu />
            </div>
        </div>
    }
}
