//! PageFrame — wrapper raiz padrão de toda página renderizada numa aba.
//!
//! Garante dois atributos de metadata no elemento raiz:
//!   - `id`                  — `"{entity}--{category}"`, ex. `"a001_container--list"`
//!   - `data-page-category`  — uma das constantes PAGE_CAT_*

use super::page_standard::*;
use leptos::prelude::*;

/// Wrapper raiz com a classe BEM derivada da categoria.
#[component]
pub fn PageFrame(
    /// Id HTML no formato `{entity}--{category}`.
    page_id: &'static str,
    /// Uma das constantes PAGE_CAT_* de `page_standard`.
    category: &'static str,
    /// Classes CSS adicionais.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_LIST => "page",
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_SYSTEM => "page",
        PAGE_CAT_CUSTOM => "page page--custom",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
