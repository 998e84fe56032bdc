use leptos::prelude::*;
use std::sync::Arc;

type ModalContent = Arc<dyn Fn() -> AnyView + Send + Sync>;

/// Serviço central de modais. Um modal por vez; abrir outro substitui o
/// atual (last-write-wins, como o resto do estado da UI).
#[derive(Clone, Copy)]
pub struct ModalService {
    content: RwSignal<Option<ModalContent>>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            content: RwSignal::new(None),
        }
    }

    /// Abre um modal com o conteúdo produzido pela closure.
    pub fn open<F>(&self, render: F)
    where
        F: Fn() -> AnyView + Send + Sync + 'static,
    {
        self.content.set(Some(Arc::new(render)));
    }

    pub fn close(&self) {
        self.content.set(None);
    }

    pub fn is_open(&self) -> bool {
        self.content.with(|c| c.is_some())
    }
}

/// Host do modal ativo. Renderizado uma vez, junto da casca da aplicação.
#[component]
pub fn ModalHost() -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    view! {
        {move || {
            modal.content.get().map(|render| {
                view! {
                    <div
                        class="modal-overlay"
                        on:click=move |_| modal.close()
                    >
                        <div
                            class="modal-content"
                            on:click=|e| e.stop_propagation()
                        >
                            {render()}
                        </div>
                    </div>
                }
            })
        }}
    }
}
