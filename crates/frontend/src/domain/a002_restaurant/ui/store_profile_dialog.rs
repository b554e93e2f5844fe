use contracts::domain::a002_restaurant::{ManagedRestaurant, StoreProfileForm};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_restaurant::api;
use crate::domain::a002_restaurant::hooks::ProfileUpdateHooks;
use crate::shared::query::{use_mutation, use_query_client, QueryHandle};
use crate::shared::toast::use_toast;

/// Edit name and description of the managed restaurant
///
/// The form is refilled from the cached restaurant every time the dialog
/// opens, so a cancelled edit never leaks into the next one.
#[component]
pub fn StoreProfileDialog(open: RwSignal<bool>, restaurant: QueryHandle<ManagedRestaurant>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());

    Effect::new(move |_| {
        if open.get() {
            let form = restaurant
                .data()
                .map(|r| StoreProfileForm::from_restaurant(&r))
                .unwrap_or_default();
            name.set(form.name);
            description.set(form.description);
            errors.set(FieldErrors::new());
        }
    });

    let hooks = ProfileUpdateHooks::new(use_query_client(), use_toast())
        .on_saved(Callback::new(move |_| open.set(false)));
    let update = use_mutation(hooks, api::update_profile);
    let pending = update.pending();

    let on_submit = move |_| {
        let form = StoreProfileForm {
            name: name.get_untracked(),
            description: description.get_untracked(),
        };
        match form.validate() {
            Ok(profile) => {
                errors.set(FieldErrors::new());
                update.mutate(profile);
            }
            Err(field_errors) => errors.set(field_errors),
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Perfil da loja"</DialogTitle>
                    <DialogContent>
                        <p class="muted">"Atualize as informações do seu estabelecimento visíveis ao seu cliente"</p>
                        <Flex vertical=true gap=FlexGap::Medium>
                            <div class="form-field">
                                <Label>"Nome"</Label>
                                <Input value=name attr:id="name" />
                                {move || errors.with(|e| e.get("name").map(|msg| view! {
                                    <p class="field-error">{msg.to_string()}</p>
                                }))}
                            </div>
                            <div class="form-field">
                                <Label>"Descrição"</Label>
                                <Textarea value=description attr:id="description" />
                            </div>
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| open.set(false)
                        >
                            "Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=on_submit
                            disabled=pending
                        >
                            "Salvar"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
