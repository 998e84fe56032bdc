use crate::shared::icons::icon;
use leptos::prelude::*;

/// Painel de filtros recolhível, com badge de filtros ativos e área de
/// paginação no cabeçalho.
#[component]
pub fn FilterPanel(
    /// Painel expandido?
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Quantidade de filtros ativos (para o badge)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Controles de paginação (slot do cabeçalho)
    pagination_controls: impl Fn() -> AnyView + Send + 'static,

    /// Conteúdo do painel (campos do filtro)
    filter_content: impl Fn() -> AnyView + Send + 'static,

    /// Chips de filtros ativos (opcional)
    #[prop(optional)]
    filter_tags: Option<Callback<(), AnyView>>,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_expanded
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        "\u{25be}"
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filtros"</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            Some(view! {
                                <span class="badge badge--primary">{count}</span>
                            })
                        } else {
                            None
                        }
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls()}
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {filter_content()}
                    {filter_tags.map(|tags| view! {
                        <div class="filter-panel__tags">{move || tags.run(())}</div>
                    })}
                </div>
            </div>
        </div>
    }
}

/// Chip de filtro ativo, com remoção.
#[component]
pub fn FilterTag(
    #[prop(into)]
    label: String,

    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <button
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                "×"
            </button>
        </div>
    }
}
