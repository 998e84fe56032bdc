use crate::domain::a003_operation::ui::details::OperationDetails;
use crate::layout::ModalService;
use crate::shared::api_utils::{api_url, report_client_error};
use crate::shared::date_utils::format_datetime;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::ToastService;
use contracts::enums::OperationType;
use contracts::shared::api::{ApiEnvelope, OperationRecord};
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Debug)]
pub struct OperationRow {
    pub id: String,
    pub tipo: String,
    pub container: String,
    pub posicao: String,
    pub status: String,
    pub observacao: String,
    pub criado_em: String,
}

impl From<OperationRecord> for OperationRow {
    fn from(o: OperationRecord) -> Self {
        // Código desconhecido é exibido cru: rótulo opaco do backend.
        let tipo = OperationType::from_code(&o.tipo)
            .map(|t| t.display_name().to_string())
            .unwrap_or(o.tipo);

        Self {
            id: o.id.to_string(),
            tipo,
            container: o.container,
            posicao: o.posicao.unwrap_or_else(|| "-".to_string()),
            status: o.status,
            observacao: o.observacao.unwrap_or_else(|| "-".to_string()),
            criado_em: format_datetime(&o.criado_em.to_rfc3339()),
        }
    }
}

/// Lista de operações recentes + criação de novas via modal.
#[component]
pub fn OperationList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<OperationRow>>(Vec::new());
    let (loading, set_loading) = signal(false);

    let modal = use_context::<ModalService>().expect("ModalService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match fetch_operations().await {
                Ok(records) => {
                    let rows: Vec<OperationRow> = records.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                }
                Err(e) => {
                    report_client_error("a003_operation", e);
                    toasts.error("Falha ao carregar operações");
                    set_items.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    };

    fetch();

    let open_new_operation = move |_| {
        let on_saved = Callback::new(move |_| {
            modal.close();
            fetch();
        });
        let on_cancel = Callback::new(move |_| modal.close());

        modal.open(move || {
            view! {
                <OperationDetails on_saved=on_saved on_cancel=on_cancel />
            }
            .into_any()
        });
    };

    view! {
        <PageFrame page_id="a003_operation--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2 class="page__title">"Operações"</h2>
                <button class="button button--primary" on:click=open_new_operation>
                    "Nova operação"
                </button>
            </div>

            <div class="page__content">
                {move || {
                    if loading.get() {
                        view! { <div class="list-loading">"Carregando operações..."</div> }.into_any()
                    } else {
                        let rows = items.get();
                        if rows.is_empty() {
                            view! { <div class="list-empty">"Nenhuma operação registrada."</div> }.into_any()
                        } else {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Tipo"</th>
                                            <th>"Container"</th>
                                            <th>"Posição"</th>
                                            <th>"Status"</th>
                                            <th>"Observações"</th>
                                            <th>"Registrada em"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {rows.into_iter().map(|row| {
                                            view! {
                                                <tr>
                                                    <td>{row.tipo.clone()}</td>
                                                    <td>{row.container.clone()}</td>
                                                    <td>{row.posicao.clone()}</td>
                                                    <td>{row.status.clone()}</td>
                                                    <td>{row.observacao.clone()}</td>
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

async fn fetch_operations() -> Result<Vec<OperationRecord>, String> {
    let resp = Request::get(&api_url("/api/operacoes"))
        .send()
        .await
        .map_err(|e| format!("network error: {e}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = resp.text().await.map_err(|e| format!("{e}"))?;
    let envelope: ApiEnvelope<Vec<OperationRecord>> =
        serde_json::from_str(&text).map_err(|e| format!("parse error: {e}"))?;
    envelope.into_result()
}
