use contracts::shared::validation::FieldErrors;
use contracts::system::auth::{SignInForm, SignInRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;
use thaw::*;

use crate::shared::http::{use_api, ApiClient};
use crate::shared::page_title::set_page_title;
use crate::shared::toast::{use_toast, Toast, ToastService};
use crate::system::auth::{api, flash::use_flash_message};

/// Send the magic link; the success toast offers to send it again
fn request_link(api: ApiClient, toast: ToastService, request: SignInRequest, pending: RwSignal<bool>) {
    pending.set(true);
    spawn_local(async move {
        match api::sign_in(api.clone(), request.clone()).await {
            Ok(()) => {
                let resend_api = api.clone();
                toast.show(
                    Toast::success("Enviamos um link com autenticação para seu e-mail.").action(
                        "Reenviar",
                        move || request_link(resend_api.clone(), toast, request.clone(), pending),
                    ),
                );
            }
            Err(e) => {
                log::warn!("Sign-in failed: {}", e);
                toast.error("Credenciais inválidas.");
            }
        }
        pending.set(false);
    });
}

#[component]
pub fn SignInPage() -> impl IntoView {
    set_page_title("Login");
    use_flash_message();

    let api = use_api();
    let toast = use_toast();
    let query = use_query_map();

    let email = RwSignal::new(query.with_untracked(|q| q.get("email")).unwrap_or_default());
    let errors = RwSignal::new(FieldErrors::new());
    let pending = RwSignal::new(false);

    let on_submit = move |_| {
        let form = SignInForm { email: email.get() };
        match form.validate() {
            Ok(request) => {
                errors.set(FieldErrors::new());
                request_link(api.clone(), toast, request, pending);
            }
            Err(e) => errors.set(e),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__corner">
                <A href="/sign-up">"Novo estabelecimento"</A>
            </div>
            <div class="auth-form">
                <div class="auth-form__heading">
                    <h1>"Acessar painel"</h1>
                    <p>"Acompanhe suas vendas pelo painel do parceiro!"</p>
                </div>

                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Seu e-mail"</Label>
                    <Input
                        input_type=InputType::Email
                        value=email
                        placeholder="example@example.com"
                    />
                    {move || errors.with(|e| e.get("email").map(|m| view! {
                        <span class="field-error">{m.to_string()}</span>
                    }))}
                </Flex>

                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_submit
                    disabled=Signal::derive(move || pending.get())
                    attr:style="width: 100%;"
                >
                    "Acessar painel"
                </Button>
            </div>
        </div>
    }
}
