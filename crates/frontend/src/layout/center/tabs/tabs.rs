use crate::layout::center::tabs::tab::Tab as TabComponent;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::render_tab_content;
use leptos::prelude::*;

/// Página de uma aba. O conteúdo é criado uma vez por abertura e
/// escondido via CSS quando a aba perde o foco — manter o componente vivo
/// preserva o estado dos formulários.
#[component]
fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    let is_active = move || {
        let current_active = tabs_store.active.get();
        current_active.as_ref() == Some(&tab_key_for_active_check)
    };

    let content = render_tab_content(&tab_key);

    view! {
        <div class="tab-page" class:hidden=move || !is_active()>
            {content}
        </div>
    }
}

/// Barra de abas + conteúdo da aba ativa.
#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        view! { <TabComponent tab=tab /> }
                    }
                />
            </div>

            <div class="tabs-content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    }
                />
                {move || {
                    if tabs_store.opened.get().is_empty() {
                        Some(view! {
                            <div class="tabs-empty">
                                <p>"Selecione uma seção no menu à esquerda."</p>
                            </div>
                        })
                    } else {
                        None
                    }
                }}
            </div>
        </div>
    }
}
