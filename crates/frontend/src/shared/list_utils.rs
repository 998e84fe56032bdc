//! Utilidades de listas: busca, ordenação e componentes de apoio.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

const SEARCH_DEBOUNCE_MS: u32 = 300;
const MIN_SEARCH_LEN: usize = 3;

/// Tipos de linha que suportam busca textual.
pub trait Searchable {
    /// A linha satisfaz o termo de busca?
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Tipos de linha ordenáveis por campo nomeado.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Destaca as ocorrências do termo no texto (case-insensitive).
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter = filter.trim();
    if filter.len() < MIN_SEARCH_LEN {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    if !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;

        if actual_pos > last_pos {
            parts.push(
                view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any(),
            );
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(view! {
            <span class="search-highlight">
                {text[actual_pos..match_end].to_string()}
            </span>
        }.into_any());

        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Ordena a lista pelo campo indicado.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Filtra pelo termo de busca. Termos curtos demais não filtram nada.
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().len() < MIN_SEARCH_LEN {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Campo de busca com debounce e botão de limpar.
#[component]
pub fn SearchInput(
    /// Valor atual do filtro (para exibição)
    #[prop(into)]
    value: Signal<String>,
    /// Callback disparado após o debounce
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar (mín. 3 caracteres)...".to_string()
    } else {
        placeholder
    };

    // Estado local do input, antes do debounce
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Geração do debounce: só a última edição dispara o callback.
    let generation = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let my_generation = generation.get_value() + 1;
        generation.set_value(my_generation);

        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.get_value() == my_generation {
                on_change.run(new_value);
            }
        });
    };

    let clear = move |_| {
        set_input_value.set(String::new());
        generation.set_value(generation.get_value() + 1);
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || {
                if input_value.get().is_empty() {
                    None
                } else {
                    Some(view! {
                        <button class="search-input__clear" on:click=clear>"×"</button>
                    })
                }
            }}
        </div>
    }
}
