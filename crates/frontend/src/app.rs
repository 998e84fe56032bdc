use crate::layout::global_context::AppGlobalContext;
use crate::layout::ModalService;
use crate::routes::routes::AppRoutes;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Contextos globais: abas/navegação, modais e toasts.
    provide_context(AppGlobalContext::new());
    provide_context(ModalService::new());
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
    }
}
