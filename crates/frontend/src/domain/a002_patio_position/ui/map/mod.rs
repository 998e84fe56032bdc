use crate::shared::api_utils::{api_url, report_client_error};
use crate::shared::cache::TtlCache;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use crate::shared::position_selector::PositionSelector;
use crate::shared::toast::ToastService;
use contracts::domain::patio::{group_by_bay, Bay, PositionToken, YardStats};
use contracts::shared::api::{PatioPositionsResponse, PositionRecord};
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::*;

/// Mapa do pátio: ocupação por baia + seletor de posições livres.
///
/// O catálogo de posições é caro no backend, então fica num cache local
/// de dois minutos; "Atualizar" invalida e recarrega.
#[component]
pub fn PatioMap() -> impl IntoView {
    let records = RwSignal::new(Vec::<PositionRecord>::new());
    let loading = RwSignal::new(false);
    let cache: TtlCache<Vec<PositionRecord>> = TtlCache::new();

    let selected = RwSignal::new(None::<PositionToken>);

    // Baias visíveis no resumo de ocupação; vazio = todas.
    let visible_bays: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());

    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let load = move |force: bool| {
        if !force {
            if let Some(cached) = cache.get() {
                records.set(cached);
                return;
            }
        } else {
            cache.invalidate();
        }

        loading.set(true);
        spawn_local(async move {
            match fetch_positions().await {
                Ok(list) => {
                    cache.put(list.clone());
                    records.set(list);
                }
                Err(e) => {
                    report_client_error("a002_patio_position", e);
                    toasts.error("Falha ao carregar as posições do pátio");
                    records.set(Vec::new());
                }
            }
            loading.set(false);
        });
    };

    load(false);

    // Tokens malformados vindos da API são descartados em silêncio.
    let free_tokens = Memo::new(move |_| {
        records
            .get()
            .iter()
            .filter(|r| !r.ocupada)
            .filter_map(|r| PositionToken::parse_opt(&r.posicao))
            .collect::<Vec<PositionToken>>()
    });

    let occupied_tokens = Memo::new(move |_| {
        records
            .get()
            .iter()
            .filter(|r| r.ocupada)
            .filter_map(|r| PositionToken::parse_opt(&r.posicao))
            .collect::<Vec<PositionToken>>()
    });

    let free_stats = Memo::new(move |_| {
        let tokens = free_tokens.get();
        YardStats::collect(&tokens)
    });

    let on_select = Callback::new(move |token: Option<PositionToken>| {
        selected.set(token);
    });

    view! {
        <PageFrame page_id="a002_patio_position--custom" category=PAGE_CAT_CUSTOM>
            <div class="page__header">
                <h2 class="page__title">"Mapa do Pátio"</h2>
                <button
                    class="button button--secondary"
                    on:click=move |_| load(true)
                    disabled=move || loading.get()
                >
                    {icon("refresh")}
                    " Atualizar"
                </button>
            </div>

            {move || {
                if loading.get() && records.get().is_empty() {
                    Some(view! {
                        <div class="patio-map__loading">"Carregando posições..."</div>
                    })
                } else {
                    None
                }
            }}

            <div class="patio-map__summary">
                <span>
                    {move || {
                        let stats = free_stats.get();
                        format!(
                            "{} posições livres ({} de 20 pés, {} de 40 pés)",
                            stats.total, stats.teu20, stats.teu40
                        )
                    }}
                </span>

                <div class="patio-map__bay-filter">
                    <span class="patio-map__bay-filter-label">"Baias no resumo"</span>
                    <CheckboxGroup value=visible_bays>
                        {Bay::all()
                            .into_iter()
                            .map(|bay| {
                                let value = bay.as_char().to_string();
                                let label = bay.display_name().to_string();
                                view! {
                                    <Checkbox value=value label=label />
                                }
                            })
                            .collect_view()}
                    </CheckboxGroup>
                </div>
            </div>

            <div class="patio-map__occupancy">
                {move || {
                    let groups = group_by_bay(&occupied_tokens.get());
                    let filter = visible_bays.get();
                    groups
                        .into_iter()
                        .filter(|(bay, _)| {
                            filter.is_empty() || filter.contains(&bay.as_char().to_string())
                        })
                        .map(|(bay, tokens)| {
                            view! {
                                <div class="occupancy-row">
                                    <span class="occupancy-row__bay">{bay.display_name()}</span>
                                    <span class="occupancy-row__count">
                                        {format!("{} ocupadas", tokens.len())}
                                    </span>
                                    <div class="occupancy-row__tokens">
                                        {tokens
                                            .into_iter()
                                            .map(|t| view! {
                                                <span class="occupancy-chip" title=t.description()>
                                                    {t.to_string()}
                                                </span>
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <h3 class="patio-map__selector-title">"Posições livres"</h3>
            <PositionSelector
                positions=Signal::derive(move || free_tokens.get())
                on_select=on_select
                selected=Signal::derive(move || selected.get())
            />
        </PageFrame>
    }
}

async fn fetch_positions() -> Result<Vec<PositionRecord>, String> {
    let resp = Request::get(&api_url("/api/patio/posicoes"))
        .send()
        .await
        .map_err(|e| format!("network error: {e}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = resp.text().await.map_err(|e| format!("{e}"))?;
    let parsed: PatioPositionsResponse =
        serde_json::from_str(&text).map_err(|e| format!("parse error: {e}"))?;
    if !parsed.success {
        return Err("backend reported failure".to_string());
    }
    Ok(parsed.posicoes)
}
