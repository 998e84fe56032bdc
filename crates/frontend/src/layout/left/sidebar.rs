//! Sidebar com grupos de menu recolhíveis.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "bar-chart",
            items: vec![(
                "d400_patio_overview",
                tab_label_for_key("d400_patio_overview"),
                "activity",
            )],
        },
        MenuGroup {
            id: "patio",
            label: "Pátio",
            icon: "grid",
            items: vec![(
                "a002_patio_position",
                tab_label_for_key("a002_patio_position"),
                "map",
            )],
        },
        MenuGroup {
            id: "cadastros",
            label: "Cadastros",
            icon: "database",
            items: vec![
                ("a001_container", tab_label_for_key("a001_container"), "container"),
                ("s001_user", tab_label_for_key("s001_user"), "user"),
            ],
        },
        MenuGroup {
            id: "operacoes",
            label: "Operações",
            icon: "layers",
            items: vec![(
                "a003_operation",
                tab_label_for_key("a003_operation"),
                "clipboard",
            )],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Grupos começam todos abertos; o usuário recolhe o que não usa.
    let expanded: RwSignal<HashSet<String>> = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect(),
    );

    let toggle_group = move |id: String| {
        expanded.update(|set| {
            if !set.remove(&id) {
                set.insert(id);
            }
        });
    };

    view! {
        <nav class="sidebar">
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    let group_id = group.id.to_string();
                    let group_id_for_class = group_id.clone();
                    let is_expanded = move || expanded.get().contains(&group_id_for_class);
                    let is_expanded_for_list = is_expanded.clone();

                    view! {
                        <div class="sidebar-group">
                            <div
                                class="sidebar-group__header"
                                on:click=move |_| toggle_group(group_id.clone())
                            >
                                {icon(group.icon)}
                                <span class="sidebar-group__label">{group.label}</span>
                                <span
                                    class="sidebar-group__chevron"
                                    class:expanded=is_expanded.clone()
                                >
                                    "\u{25be}"
                                </span>
                            </div>
                            <ul
                                class="sidebar-group__items"
                                class:hidden=move || !is_expanded_for_list()
                            >
                                {group
                                    .items
                                    .into_iter()
                                    .map(|(id, label, item_icon)| {
                                        let id_for_active = id;
                                        let is_active = move || {
                                            tabs_store.active.get().as_deref() == Some(id_for_active)
                                        };
                                        view! {
                                            <li
                                                class="sidebar-item"
                                                class:active=is_active
                                                on:click=move |_| tabs_store.open_tab(id, label)
                                            >
                                                {icon(item_icon)}
                                                <span>{label}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
