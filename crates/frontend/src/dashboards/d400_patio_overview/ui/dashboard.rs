use crate::shared::api_utils::{api_url, report_client_error};
use crate::shared::cache::TtlCache;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::toast::ToastService;
use contracts::domain::patio::{Bay, PositionToken, YardStats};
use contracts::shared::api::{PatioPositionsResponse, PositionRecord};
use contracts::shared::indicators::{IndicatorStatus, PatioIndicators, PatioIndicatorsResponse, ValueFormat};
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Dashboard de visão geral do pátio.
///
/// Os KPIs principais vêm do backend (`/api/patio/indicadores`); a
/// distribuição por baia, altura e tamanho é derivada localmente do
/// catálogo de posições.
#[component]
pub fn PatioOverviewDashboard() -> impl IntoView {
    let indicators = RwSignal::new(None::<PatioIndicators>);
    let records = RwSignal::new(Vec::<PositionRecord>::new());
    let loading = RwSignal::new(false);
    let positions_cache: TtlCache<Vec<PositionRecord>> = TtlCache::new();

    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let load = move |force: bool| {
        loading.set(true);

        spawn_local(async move {
            match fetch_indicators().await {
                Ok(ind) => indicators.set(Some(ind)),
                Err(e) => {
                    report_client_error("d400_patio_overview", e);
                    toasts.error("Falha ao carregar os indicadores do pátio");
                    indicators.set(None);
                }
            }

            if force {
                positions_cache.invalidate();
            }
            if let Some(cached) = positions_cache.get() {
                records.set(cached);
            } else {
                match fetch_positions().await {
                    Ok(list) => {
                        positions_cache.put(list.clone());
                        records.set(list);
                    }
                    Err(e) => {
                        report_client_error("d400_patio_overview", e);
                        records.set(Vec::new());
                    }
                }
            }

            loading.set(false);
        });
    };

    load(false);

    let occupied_stats = Memo::new(move |_| {
        let tokens: Vec<PositionToken> = records
            .get()
            .iter()
            .filter(|r| r.ocupada)
            .filter_map(|r| PositionToken::parse_opt(&r.posicao))
            .collect();
        YardStats::collect(&tokens)
    });

    let all_stats = Memo::new(move |_| {
        let tokens: Vec<PositionToken> = records
            .get()
            .iter()
            .filter_map(|r| PositionToken::parse_opt(&r.posicao))
            .collect();
        YardStats::collect(&tokens)
    });

    let percent_format = ValueFormat::Percent { decimals: 1 };

    let occupancy_status = Memo::new(move |_| match indicators.get() {
        Some(ind) if ind.ocupacao_percent >= 90.0 => IndicatorStatus::Bad,
        Some(ind) if ind.ocupacao_percent >= 75.0 => IndicatorStatus::Warning,
        Some(_) => IndicatorStatus::Good,
        None => IndicatorStatus::Neutral,
    });

    view! {
        <PageFrame page_id="d400_patio_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h2 class="page__title">"Visão do Pátio"</h2>
                <button
                    class="button button--secondary"
                    on:click=move |_| load(true)
                    disabled=move || loading.get()
                >
                    {icon("refresh")}
                    " Atualizar"
                </button>
            </div>

            <div class="dashboard__cards">
                <StatCard
                    label="Total de posições".to_string()
                    icon_name="grid".to_string()
                    value=Signal::derive(move || {
                        indicators.get().map(|i| i.total_posicoes as f64)
                    })
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
                <StatCard
                    label="Ocupadas".to_string()
                    icon_name="container".to_string()
                    value=Signal::derive(move || indicators.get().map(|i| i.ocupadas as f64))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
                <StatCard
                    label="Livres".to_string()
                    icon_name="map".to_string()
                    value=Signal::derive(move || indicators.get().map(|i| i.livres as f64))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
                <StatCard
                    label="Ocupação".to_string()
                    icon_name="activity".to_string()
                    value=Signal::derive(move || indicators.get().map(|i| i.ocupacao_percent))
                    format=percent_format
                    status=occupancy_status
                />
                <StatCard
                    label="Slots 20 pés ocupados".to_string()
                    icon_name="layers".to_string()
                    value=Signal::derive(move || Some(occupied_stats.get().teu20 as f64))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
                <StatCard
                    label="Slots 40 pés ocupados".to_string()
                    icon_name="layers".to_string()
                    value=Signal::derive(move || Some(occupied_stats.get().teu40 as f64))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
            </div>

            <h3 class="dashboard__section-title">"Ocupação por baia"</h3>
            <div class="dashboard__bays">
                {move || {
                    let occupied = occupied_stats.get();
                    let all = all_stats.get();
                    Bay::all()
                        .into_iter()
                        .map(|bay| {
                            let total = all.count_for_bay(bay);
                            let used = occupied.count_for_bay(bay);
                            let percent = if total == 0 {
                                0.0
                            } else {
                                used as f64 / total as f64 * 100.0
                            };
                            view! {
                                <div class="bay-bar">
                                    <span class="bay-bar__label">{bay.display_name()}</span>
                                    <div class="bay-bar__track">
                                        <div
                                            class="bay-bar__fill"
                                            style=format!("width: {:.0}%", percent)
                                        ></div>
                                    </div>
                                    <span class="bay-bar__count">
                                        {format!("{} / {}", used, total)}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <h3 class="dashboard__section-title">"Distribuição por altura"</h3>
            <div class="dashboard__heights">
                {move || {
                    let occupied = occupied_stats.get();
                    (1u8..=5)
                        .map(|height| {
                            view! {
                                <div class="height-cell">
                                    <span class="height-cell__label">{format!("Altura {}", height)}</span>
                                    <span class="height-cell__count">
                                        {occupied.count_for_height(height)}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </PageFrame>
    }
}

async fn fetch_indicators() -> Result<PatioIndicators, String> {
    let resp = Request::get(&api_url("/api/patio/indicadores"))
        .send()
        .await
        .map_err(|e| format!("network error: {e}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = resp.text().await.map_err(|e| format!("{e}"))?;
    let parsed: PatioIndicatorsResponse =
        serde_json::from_str(&text).map_err(|e| format!("parse error: {e}"))?;
    if !parsed.success {
        return Err("backend reported failure".to_string());
    }
    parsed
        .indicadores
        .ok_or_else(|| "resposta sem indicadores".to_string())
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
