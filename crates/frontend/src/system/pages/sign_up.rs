use contracts::shared::validation::FieldErrors;
use contracts::system::auth::SignUpForm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use serde::Serialize;
use thaw::*;

use crate::shared::http::use_api;
use crate::shared::page_title::set_page_title;
use crate::shared::toast::{use_toast, Toast};
use crate::system::auth::api;

#[derive(Serialize)]
struct EmailPrefill<'a> {
    email: &'a str,
}

/// `/sign-in?email=...` so the e-mail field comes pre-filled
pub fn sign_in_href(email: &str) -> String {
    match serde_qs::to_string(&EmailPrefill { email }) {
        Ok(query) => format!("/sign-in?{}", query),
        Err(_) => "/sign-in".to_string(),
    }
}

#[component]
fn FormField(label: &'static str, field: &'static str, errors: RwSignal<FieldErrors>, children: Children) -> impl IntoView {
    view! {
        <Flex vertical=true gap=FlexGap::Small>
            <Label>{label}</Label>
            {children()}
            {move || errors.with(|e| e.get(field).map(|m| view! {
                <span class="field-error">{m.to_string()}</span>
            }))}
        </Flex>
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    set_page_title("Cadastro");

    let api = use_api();
    let toast = use_toast();
    let navigate = use_navigate();

    let restaurant_name = RwSignal::new(String::new());
    let manager_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let pending = RwSignal::new(false);

    let on_submit = move |_| {
        let form = SignUpForm {
            restaurant_name: restaurant_name.get(),
            manager_name: manager_name.get(),
            email: email.get(),
            phone: phone.get(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        pending.set(true);

        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let href = sign_in_href(&request.email);
            match api::register_restaurant(api, request).await {
                Ok(()) => toast.show(
                    Toast::success("Restaurante cadastrado com sucesso.").action("Login", move || {
                        navigate(&href, NavigateOptions::default())
                    }),
                ),
                Err(e) => {
                    log::warn!("Restaurant registration failed: {}", e);
                    toast.error("Erro ao cadastrar restaurante.");
                }
            }
            pending.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__corner">
                <A href="/sign-in">"Fazer login"</A>
            </div>
            <div class="auth-form">
                <div class="auth-form__heading">
                    <h1>"Criar conta grátis"</h1>
                    <p>"Seja um parceiro e comece suas vendas!"</p>
                </div>

                <FormField label="Nome do estabelecimento" field="restaurant_name" errors=errors>
                    <Input value=restaurant_name placeholder="Pizza Shop" />
                </FormField>
                <FormField label="Seu nome" field="manager_name" errors=errors>
                    <Input value=manager_name />
                </FormField>
                <FormField label="Seu e-mail" field="email" errors=errors>
                    <Input input_type=InputType::Email value=email placeholder="example@example.com" />
                </FormField>
                <FormField label="Seu celular" field="phone" errors=errors>
                    <Input input_type=InputType::Tel value=phone placeholder="99999999999" />
                </FormField>

                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_submit
                    disabled=Signal::derive(move || pending.get())
                    attr:style="width: 100%;"
                >
                    "Finalizar cadastro"
                </Button>

                <p class="auth-form__terms">
                    "Ao continuar, você concorda com nossos termos de serviço e políticas de privacidade."
                </p>
            </div>
        </div>
    }
}
