use crate::shared::api_utils::{api_url, report_client_error};
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime;
use crate::shared::list_utils::{highlight_matches, SearchInput, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::ToastService;
use contracts::shared::api::{ApiEnvelope, ContainerRecord};
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Debug, PartialEq)]
pub struct ContainerRow {
    pub id: String,
    pub numero: String,
    pub armador: String,
    pub tipo: String,
    pub status: String,
    pub posicao: String,
    pub criado_em: String,
}

impl From<ContainerRecord> for ContainerRow {
    fn from(c: ContainerRecord) -> Self {
        Self {
            id: c.id.to_string(),
            numero: c.numero,
            armador: c.armador,
            tipo: c.tipo,
            status: c.status,
            posicao: c.posicao_atual.unwrap_or_else(|| "-".to_string()),
            criado_em: format_datetime(&c.criado_em.to_rfc3339()),
        }
    }
}

impl Searchable for ContainerRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.numero.to_lowercase().contains(&needle)
            || self.armador.to_lowercase().contains(&needle)
            || self.posicao.to_lowercase().contains(&needle)
    }
}

/// Lista do inventário de containers: busca no servidor, paginação no
/// cliente.
#[component]
pub fn ContainerList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<ContainerRow>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal::<Option<String>>(None);
    let (current_page, set_current_page) = signal(0usize);
    let (page_size, set_page_size) = signal(50usize);
    let filter_expanded = RwSignal::new(false);

    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let fetch = move |term: String| {
        set_loading.set(true);
        spawn_local(async move {
            match fetch_containers(&term).await {
                Ok(records) => {
                    let rows: Vec<ContainerRow> = records.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                }
                Err(e) => {
                    report_client_error("a001_container", e);
                    toasts.error("Falha ao carregar containers");
                    set_items.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    };

    // Carga inicial
    fetch(String::new());

    let on_search = Callback::new(move |term: String| {
        set_search.set(term.clone());
        set_current_page.set(0);
        fetch(term);
    });

    // Filtro de status aplicado no cliente, sobre o resultado da busca.
    let visible = Memo::new(move |_| {
        let status = status_filter.get();
        items
            .get()
            .into_iter()
            .filter(|row| match &status {
                Some(s) => row.status.eq_ignore_ascii_case(s),
                None => true,
            })
            .collect::<Vec<ContainerRow>>()
    });

    let total_count = Memo::new(move |_| visible.get().len());
    let total_pages = Memo::new(move |_| {
        let size = page_size.get().max(1);
        total_count.get().div_ceil(size)
    });

    let page_rows = Memo::new(move |_| {
        let page = current_page.get();
        let size = page_size.get().max(1);
        visible
            .get()
            .into_iter()
            .skip(page * size)
            .take(size)
            .collect::<Vec<ContainerRow>>()
    });

    let active_filters = Memo::new(move |_| usize::from(status_filter.get().is_some()));

    let on_page_change = Callback::new(move |page: usize| set_current_page.set(page));
    let on_page_size_change = Callback::new(move |size: usize| {
        set_page_size.set(size);
        set_current_page.set(0);
    });

    view! {
        <PageFrame page_id="a001_container--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2 class="page__title">"Containers"</h2>
                <SearchInput
                    value=search
                    on_change=on_search
                    placeholder="Número, armador ou posição...".to_string()
                />
            </div>

            <FilterPanel
                is_expanded=filter_expanded
                active_filters_count=active_filters
                pagination_controls=move || view! {
                    <PaginationControls
                        current_page=current_page
                        total_pages=total_pages
                        total_count=total_count
                        page_size=page_size
                        on_page_change=on_page_change
                        on_page_size_change=on_page_size_change
                    />
                }.into_any()
                filter_content=move || view! {
                    <div class="filter-field">
                        <label>"Status"</label>
                        <select on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_status_filter.set(if value.is_empty() { None } else { Some(value) });
                            set_current_page.set(0);
                        }>
                            <option value="">"Todos"</option>
                            <option value="no_patio">"No pátio"</option>
                            <option value="em_transito">"Em trânsito"</option>
                            <option value="liberado">"Liberado"</option>
                        </select>
                    </div>
                }.into_any()
                filter_tags=Callback::new(move |_| view! {
                    {status_filter.get().map(|status| {
                        view! {
                            <FilterTag
                                label=format!("Status: {}", status)
                                on_remove=Callback::new(move |_| set_status_filter.set(None))
                            />
                        }
                    })}
                }.into_any())
            />

            <div class="page__content">
                {move || {
                    if loading.get() {
                        view! { <div class="list-loading">"Carregando containers..."</div> }.into_any()
                    } else {
                        let rows = page_rows.get();
                        if rows.is_empty() {
                            view! { <div class="list-empty">"Nenhum container encontrado."</div> }.into_any()
                        } else {
                            let term = search.get();
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Número"</th>
                                            <th>"Armador"</th>
                                            <th>"Tipo"</th>
                                            <th>"Status"</th>
                                            <th>"Posição"</th>
                                            <th>"Entrada"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {rows.into_iter().map(|row| {
                                            view! {
                                                <tr>
                                                    <td>{highlight_matches(&row.numero, &term)}</td>
                                                    <td>{highlight_matches(&row.armador, &term)}</td>
                                                    <td>{row.tipo.clone()}</td>
                                                    <td>{row.status.clone()}</td>
                                                    <td>{highlight_matches(&row.posicao, &term)}</td>
                                                    <td>{row.criado_em.clone()}</td>
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
        </PageFrame>
    }
}

async fn fetch_containers(search: &str) -> Result<Vec<ContainerRecord>, String> {
    let url = if search.trim().is_empty() {
        api_url("/api/containers")
    } else {
        api_url(&format!(
            "/api/containers?search={}",
            urlencoding::encode(search.trim())
        ))
    };

    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("network error: {e}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = resp.text().await.map_err(|e| format!("{e}"))?;
    let envelope: ApiEnvelope<Vec<ContainerRecord>> =
        serde_json::from_str(&text).map_err(|e| format!("parse error: {e}"))?;
    envelope.into_result()
}
