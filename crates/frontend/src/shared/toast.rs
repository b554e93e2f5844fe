use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Warning => "toast toast--warning",
        }
    }
}

#[derive(Clone)]
pub struct ToastAction {
    pub label: String,
    pub on_click: Callback<()>,
}

#[derive(Clone)]
pub struct Toast {
    pub id: u64,
    /// Showing a toast with the same dedup id replaces the visible one
    pub dedup_id: Option<String>,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
    pub action: Option<ToastAction>,
}

impl Toast {
    pub fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self {
            id: 0,
            dedup_id: None,
            kind,
            title: title.into(),
            description: None,
            action: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, title)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn dedup(mut self, id: impl Into<String>) -> Self {
        self.dedup_id = Some(id.into());
        self
    }

    pub fn action(mut self, label: impl Into<String>, on_click: impl Fn() + Send + Sync + 'static) -> Self {
        self.action = Some(ToastAction {
            label: label.into(),
            on_click: Callback::new(move |_| on_click()),
        });
        self
    }
}

/// Visible toasts, oldest first
#[derive(Clone, Default)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    /// Returns the id assigned to the toast
    pub fn push(&mut self, mut toast: Toast) -> u64 {
        self.next_id += 1;
        toast.id = self.next_id;
        if let Some(dedup_id) = &toast.dedup_id {
            self.items
                .retain(|t| t.dedup_id.as_deref() != Some(dedup_id.as_str()));
        }
        self.items.push(toast);
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// App-wide notifications, provided through context
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
    auto_dismiss_ms: Option<u32>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            auto_dismiss_ms: Some(AUTO_DISMISS_MS),
        }
    }

    /// Toasts stay until dismissed
    pub fn persistent() -> Self {
        Self {
            auto_dismiss_ms: None,
            ..Self::new()
        }
    }

    pub fn show(&self, toast: Toast) {
        let Some(id) = self.queue.try_update(|q| q.push(toast)) else {
            return;
        };
        let Some(delay) = self.auto_dismiss_ms else {
            return;
        };
        let service = *self;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            service.dismiss(id);
        });
    }

    pub fn success(&self, title: impl Into<String>) {
        self.show(Toast::success(title));
    }

    pub fn error(&self, title: impl Into<String>) {
        self.show(Toast::error(title));
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.try_update(|q| q.dismiss(id));
    }

    /// Untracked snapshot of the visible toasts
    pub fn visible(&self) -> Vec<Toast> {
        self.queue.with_untracked(|q| q.items().to_vec())
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_toast();

    view! {
        <div class="toaster">
            <For
                each=move || service.queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let action = toast.action.clone();
                    view! {
                        <div class=toast.kind.class() role="status">
                            <div class="toast__body">
                                <div class="toast__title">{toast.title.clone()}</div>
                                {toast.description.clone().map(|d| view! {
                                    <div class="toast__description">{d}</div>
                                })}
                            </div>
                            {action.map(|ToastAction { label, on_click }| view! {
                                <Button
                                    size=ButtonSize::Small
                                    on_click=move |_| {
                                        on_click.run(());
                                        service.dismiss(id);
                                    }
                                >
                                    {label}
                                </Button>
                            })}
                            <button class="toast__close" on:click=move |_| service.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(Toast::success("a"));
        let b = queue.push(Toast::error("b"));
        assert!(b > a);
        assert_eq!(queue.items().len(), 2);

        queue.dismiss(a);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].title, "b");
    }

    #[test]
    fn test_dedup_id_replaces_visible_toast() {
        let mut queue = ToastQueue::default();
        queue.push(Toast::warning("Sessão expirada").dedup("session-expired"));
        queue.push(Toast::success("Outro"));
        queue.push(Toast::warning("Sessão expirada").dedup("session-expired"));

        let titles: Vec<_> = queue.items().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Outro", "Sessão expirada"]);
    }

    #[test]
    fn test_persistent_service_keeps_toasts() {
        Owner::new().with(|| {
            let toast = ToastService::persistent();
            toast.success("Salvo");
            toast.error("Falhou");
            let visible = toast.visible();
            assert_eq!(visible.len(), 2);
            assert_eq!(visible[1].kind, ToastKind::Error);

            toast.dismiss(visible[0].id);
            assert_eq!(toast.visible().len(), 1);
        });
    }
}
