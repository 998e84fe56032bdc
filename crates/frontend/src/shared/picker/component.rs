use super::traits::TableDisplayable;
use leptos::html::Tr;
use leptos::prelude::*;

/// Picker genérico em modal, com busca incremental.
///
/// - clique seleciona a linha, duplo clique confirma
/// - `initial_selected_id` pré-seleciona e faz autoscroll até o item
/// - a busca filtra código/descrição no cliente, sem nova chamada à API
#[component]
pub fn GenericPicker<T>(
    /// Itens disponíveis
    items: ReadSignal<Vec<T>>,
    /// Erro de carregamento, se houver
    #[prop(optional)]
    error: Option<ReadSignal<Option<String>>>,
    /// Indicador de carregamento
    #[prop(optional)]
    loading: Option<ReadSignal<bool>>,
    /// Item pré-selecionado ao abrir
    initial_selected_id: Option<String>,
    /// Callback de confirmação
    on_confirm: impl Fn(Option<T>) + 'static + Clone + Send,
    /// Callback de cancelamento
    on_cancel: impl Fn(()) + 'static + Clone + Send,
    /// Título do modal
    #[prop(optional)]
    title: Option<String>,
) -> impl IntoView
where
    T: TableDisplayable + Clone + PartialEq + Send + Sync + 'static,
{
    let (selected_id, set_selected_id) = signal::<Option<String>>(initial_selected_id.clone());
    let (search, set_search) = signal(String::new());
    let title = title.unwrap_or_else(|| "Selecionar item".to_string());

    let loading_signal = loading.unwrap_or_else(|| {
        let (r, _) = signal(false);
        r
    });
    let error_signal = error.unwrap_or_else(|| {
        let (r, _) = signal(None);
        r
    });

    let visible_items = Memo::new(move |_| {
        let needle = search.get();
        items.with(|all| {
            all.iter()
                .filter(|item| item.matches_search(&needle))
                .cloned()
                .collect::<Vec<T>>()
        })
    });

    // Autoscroll até a linha pré-selecionada depois do primeiro render.
    let selected_row_ref = NodeRef::<Tr>::new();
    Effect::new(move |_| {
        if selected_id.get().is_some() && !loading_signal.get() {
            if let Some(element) = selected_row_ref.get() {
                let _ = element.scroll_into_view_with_bool(true);
            }
        }
    });

    let handle_confirm = {
        let on_confirm = on_confirm.clone();
        move |_| {
            let selected = selected_id.get();
            if let Some(id) = selected {
                items.with(|items_vec| {
                    if let Some(item) = items_vec.iter().find(|i| i.id() == id) {
                        on_confirm(Some(item.clone()));
                    } else {
                        on_confirm(None);
                    }
                });
            } else {
                on_confirm(None);
            }
        }
    };

    let handle_row_click = move |item_id: String| {
        set_selected_id.set(Some(item_id));
    };

    let on_confirm_dblclick = on_confirm.clone();
    let initial_for_rows = initial_selected_id.clone();

    view! {
        <div class="picker-container">
            <div class="picker-header">
                <h3>{title}</h3>
                <input
                    type="text"
                    class="picker-search"
                    placeholder="Buscar..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            <div class="picker-content">
                {move || {
                    if loading_signal.get() {
                        view! { <div class="picker-loading">"Carregando..."</div> }.into_any()
                    } else if let Some(err) = error_signal.get() {
                        view! {
                            <div class="picker-error">
                                <p>"Erro ao carregar: " {err}</p>
                            </div>
                        }.into_any()
                    } else {
                        let rows = visible_items.get();
                        if rows.is_empty() {
                            view! {
                                <div class="picker-empty">"Nenhum item disponível"</div>
                            }.into_any()
                        } else {
                            let initial = initial_for_rows.clone();
                            view! {
                                <table class="picker-table">
                                    <thead>
                                        <tr>
                                            <th>"Descrição"</th>
                                            <th>"Código"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {rows.into_iter().map(|item| {
                                            let item_id = item.id();
                                            let item_id_for_selected = item_id.clone();
                                            let item_id_for_click = item_id.clone();
                                            let item_for_dblclick = item.clone();
                                            let on_confirm_clone = on_confirm_dblclick.clone();
                                            let is_initially_selected = initial.as_ref() == Some(&item_id);

                                            view! {
                                                <tr
                                                    node_ref=if is_initially_selected { selected_row_ref } else { NodeRef::new() }
                                                    class="picker-row"
                                                    class:selected=move || selected_id.get().as_ref() == Some(&item_id_for_selected)
                                                    on:click=move |_| handle_row_click(item_id_for_click.clone())
                                                    on:dblclick=move |_| on_confirm_clone(Some(item_for_dblclick.clone()))
                                                >
                                                    <td>{item.description()}</td>
                                                    <td>{item.code()}</td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            }.into_any()
                        }
                    }
                }}
            </div>

            <div class="picker-actions">
                <button
                    class="button button--primary"
                    on:click=handle_confirm
                    disabled=move || selected_id.get().is_none()
                >
                    "Selecionar"
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| on_cancel(())
                >
                    "Cancelar"
                </button>
            </div>
        </div>
    }
}
