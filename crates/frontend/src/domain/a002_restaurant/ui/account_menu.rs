use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::store_profile_dialog::StoreProfileDialog;
use crate::domain::a002_restaurant::api::{self, managed_restaurant_key, profile_key};
use crate::shared::http::use_api;
use crate::shared::icons::icon;
use crate::shared::query::{use_query, use_query_client, QueryOptions, StaleTime};
use crate::shared::toast::use_toast;
use crate::system::auth::api::sign_out;

pub const SIGN_IN_PATH: &str = "/sign-in";

/// Restaurant name button in the header with the manager's account actions
#[component]
pub fn AccountMenu() -> impl IntoView {
    let api = use_api();
    let client = use_query_client();
    let toast = use_toast();
    let navigate = use_navigate();

    let restaurant = use_query(
        || (),
        |_: &()| managed_restaurant_key(),
        api::get_managed_restaurant,
        QueryOptions::stale_time(StaleTime::Infinite),
    );
    let profile = use_query(
        || (),
        |_: &()| profile_key(),
        api::get_profile,
        QueryOptions::stale_time(StaleTime::Infinite),
    );

    let is_open = RwSignal::new(false);
    let profile_dialog_open = RwSignal::new(false);
    let signing_out = RwSignal::new(false);

    let open_profile_dialog = move |_| {
        is_open.set(false);
        profile_dialog_open.set(true);
    };

    let on_sign_out = move |_| {
        if signing_out.get_untracked() {
            return;
        }
        signing_out.set(true);
        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match sign_out(api, ()).await {
                Ok(()) => {
                    // leave the signed-in layout before the cache empties
                    navigate(
                        SIGN_IN_PATH,
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                    client.clear();
                }
                Err(e) => {
                    log::error!("Sign out failed: {}", e);
                    toast.error("Não foi possível sair. Tente novamente.");
                }
            }
            signing_out.try_set(false);
        });
    };

    view! {
        <div class="account-menu">
            <button
                class="account-menu__trigger"
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                {move || match restaurant.data() {
                    Some(r) => view! { <span class="account-menu__name">{r.name}</span> }.into_any(),
                    None => view! { <span class="skeleton skeleton--text"></span> }.into_any(),
                }}
                {icon("chevron-down")}
            </button>

            <Show when=move || is_open.get()>
                <div class="account-menu__menu">
                    <div class="account-menu__label">
                        {move || match profile.data() {
                            Some(p) => view! {
                                <span>{p.name}</span>
                                <span class="muted account-menu__email">{p.email}</span>
                            }
                            .into_any(),
                            None => view! {
                                <div class="skeleton skeleton--text"></div>
                                <div class="skeleton skeleton--text"></div>
                            }
                            .into_any(),
                        }}
                    </div>
                    <div class="account-menu__separator"></div>
                    <button class="account-menu__item" on:click=open_profile_dialog>
                        {icon("building")}
                        <span>"Perfil da loja"</span>
                    </button>
                    <button
                        class="account-menu__item account-menu__item--danger"
                        on:click=on_sign_out.clone()
                        disabled=move || signing_out.get()
                    >
                        {icon("log-out")}
                        <span>"Sair"</span>
                    </button>
                </div>
            </Show>

            <StoreProfileDialog open=profile_dialog_open restaurant=restaurant />
        </div>
    }
}
