//! Seletor unificado de posições do pátio.
//!
//! Um único componente configurável por estratégia de layout substitui as
//! variantes paralelas do legado. A filtragem, ordenação e agrupamento
//! vêm do crate `contracts`; aqui só mora a renderização e a seleção.

pub mod layout;

pub use layout::SelectorLayout;

use contracts::domain::patio::{filter_positions, group_by_bay, Bay, PositionFilter, PositionToken};
use layout::{load_layout_from_storage, save_layout_to_storage};
use leptos::prelude::*;

/// Seletor de posição livre do pátio.
///
/// Recebe a lista de tokens já carregada (o dono do dado decide de onde
/// ela vem e como cacheia) e devolve a escolha via `on_select`.
#[component]
pub fn PositionSelector(
    /// Posições disponíveis para escolha
    #[prop(into)]
    positions: Signal<Vec<PositionToken>>,
    /// Callback com a posição escolhida (None = desmarcada)
    on_select: Callback<Option<PositionToken>>,
    /// Posição já escolhida, para destacar
    #[prop(optional, into)]
    selected: Signal<Option<PositionToken>>,
) -> impl IntoView {
    let layout = RwSignal::new(load_layout_from_storage());

    let bay_filter = RwSignal::new(None::<Bay>);
    let height_filter = RwSignal::new(None::<u8>);
    let search = RwSignal::new(String::new());

    let visible = Memo::new(move |_| {
        let filter = PositionFilter {
            bay: bay_filter.get(),
            height: height_filter.get(),
            search: {
                let s = search.get();
                if s.trim().is_empty() {
                    None
                } else {
                    Some(s)
                }
            },
        };
        filter_positions(&positions.get(), &filter)
    });

    let change_layout = move |new_layout: SelectorLayout| {
        layout.set(new_layout);
        save_layout_to_storage(new_layout);
    };

    let select = move |token: PositionToken| {
        if selected.get_untracked() == Some(token) {
            on_select.run(None);
        } else {
            on_select.run(Some(token));
        }
    };

    view! {
        <div class="position-selector">
            <div class="position-selector__toolbar">
                <div class="position-selector__layouts">
                    {SelectorLayout::all()
                        .into_iter()
                        .map(|l| {
                            view! {
                                <button
                                    class="position-selector__layout-btn"
                                    class:active=move || layout.get() == l
                                    on:click=move |_| change_layout(l)
                                >
                                    {l.display_name()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="position-selector__filters">
                    <select
                        class="position-selector__bay-select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            bay_filter.set(value.chars().next().and_then(Bay::from_char));
                        }
                    >
                        <option value="">"Todas as baias"</option>
                        {Bay::all()
                            .into_iter()
                            .map(|bay| {
                                view! {
                                    <option value=bay.as_char().to_string()>
                                        {bay.display_name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>

                    <select
                        class="position-selector__height-select"
                        on:change=move |ev| {
                            height_filter.set(event_target_value(&ev).parse().ok());
                        }
                    >
                        <option value="">"Todas as alturas"</option>
                        {(1u8..=5)
                            .map(|h| {
                                view! {
                                    <option value=h.to_string()>{format!("Altura {}", h)}</option>
                                }
                            })
                            .collect_view()}
                    </select>

                    <input
                        type="text"
                        class="position-selector__search"
                        placeholder="Buscar posição..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="position-selector__body">
                {move || {
                    let tokens = visible.get();
                    if tokens.is_empty() {
                        return view! {
                            <div class="position-selector__empty">
                                "Nenhuma posição disponível com os filtros atuais."
                            </div>
                        }
                        .into_any();
                    }
                    match layout.get() {
                        SelectorLayout::Table => table_layout(&tokens, selected, select).into_any(),
                        SelectorLayout::Cards => cards_layout(&tokens, selected, select).into_any(),
                        SelectorLayout::Matrix => matrix_layout(&tokens, selected, select).into_any(),
                        SelectorLayout::Touch => touch_layout(&tokens, selected, select).into_any(),
                    }
                }}
            </div>

            <div class="position-selector__footer">
                {move || match selected.get() {
                    Some(token) => format!("Selecionada: {}", token),
                    None => "Nenhuma posição selecionada".to_string(),
                }}
            </div>
        </div>
    }
}

fn table_layout(
    tokens: &[PositionToken],
    selected: Signal<Option<PositionToken>>,
    select: impl Fn(PositionToken) + Copy + 'static,
) -> impl IntoView {
    view! {
        <table class="position-selector__table">
            <thead>
                <tr>
                    <th>"Posição"</th>
                    <th>"Baia"</th>
                    <th>"Coluna"</th>
                    <th>"Altura"</th>
                </tr>
            </thead>
            <tbody>
                {tokens
                    .iter()
                    .map(|&token| {
                        view! {
                            <tr
                                class="position-selector__row"
                                class:selected=move || selected.get() == Some(token)
                                on:click=move |_| select(token)
                            >
                                <td>{token.to_string()}</td>
                                <td>{token.bay.display_name()}</td>
                                <td>{token.position}</td>
                                <td>{token.height}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

fn cards_layout(
    tokens: &[PositionToken],
    selected: Signal<Option<PositionToken>>,
    select: impl Fn(PositionToken) + Copy + 'static,
) -> impl IntoView {
    let groups = group_by_bay(tokens);
    view! {
        <div class="position-selector__cards">
            {groups
                .into_iter()
                .map(|(bay, bay_tokens)| {
                    view! {
                        <div class="position-card-group">
                            <div class="position-card-group__title">{bay.display_name()}</div>
                            <div class="position-card-group__cards">
                                {bay_tokens
                                    .into_iter()
                                    .map(|token| {
                                        view! {
                                            <div
                                                class="position-card"
                                                class:selected=move || selected.get() == Some(token)
                                                on:click=move |_| select(token)
                                            >
                                                <div class="position-card__token">{token.to_string()}</div>
                                                <div class="position-card__meta">
                                                    {format!("Coluna {} · Altura {}", token.position, token.height)}
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn matrix_layout(
    tokens: &[PositionToken],
    selected: Signal<Option<PositionToken>>,
    select: impl Fn(PositionToken) + Copy + 'static,
) -> impl IntoView {
    let groups = group_by_bay(tokens);
    view! {
        <div class="position-selector__matrix">
            {groups
                .into_iter()
                .map(|(bay, bay_tokens)| {
                    view! {
                        <div class="matrix-row">
                            <div class="matrix-row__bay">{bay.as_char().to_string()}</div>
                            <div class="matrix-row__cells">
                                {bay_tokens
                                    .into_iter()
                                    .map(|token| {
                                        view! {
                                            <button
                                                class="matrix-cell"
                                                class:selected=move || selected.get() == Some(token)
                                                title=token.description()
                                                on:click=move |_| select(token)
                                            >
                                                {format!("{:02}-{}", token.position, token.height)}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn touch_layout(
    tokens: &[PositionToken],
    selected: Signal<Option<PositionToken>>,
    select: impl Fn(PositionToken) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="position-selector__touch">
            {tokens
                .iter()
                .map(|&token| {
                    view! {
                        <button
                            class="touch-cell"
                            class:selected=move || selected.get() == Some(token)
                            on:click=move |_| select(token)
                        >
                            <span class="touch-cell__token">{token.to_string()}</span>
                            <span class="touch-cell__description">{token.description()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
