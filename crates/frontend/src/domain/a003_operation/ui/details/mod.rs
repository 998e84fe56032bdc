use crate::domain::a001_container::ui::picker::{ContainerPicker, ContainerPickerItem};
use crate::shared::api_utils::{api_url, report_client_error};
use crate::shared::position_selector::PositionSelector;
use crate::shared::toast::ToastService;
use contracts::domain::patio::PositionToken;
use contracts::enums::OperationType;
use contracts::shared::api::{ApiEnvelope, CreateOperationRequest, PatioPositionsResponse};
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

/// Formulário de registro de operação de pátio.
///
/// Descarga e movimentação pedem uma posição de destino; os outros tipos
/// só o container. O backend valida as regras de negócio — aqui só os
/// campos obrigatórios.
#[component]
pub fn OperationDetails(
    /// Chamado após salvar com sucesso
    on_saved: Callback<()>,
    /// Chamado ao cancelar
    on_cancel: Callback<()>,
) -> impl IntoView {
    let tipo = RwSignal::new(OperationType::Vistoria);
    let container = RwSignal::new(None::<ContainerPickerItem>);
    let show_picker = RwSignal::new(false);
    let position = RwSignal::new(None::<PositionToken>);
    let free_positions = RwSignal::new(Vec::<PositionToken>::new());
    let observacao = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let needs_position = Memo::new(move |_| tipo.get().requires_target_position());

    // Posições livres só interessam quando o tipo pede destino.
    Effect::new(move |_| {
        if needs_position.get() && free_positions.get_untracked().is_empty() {
            spawn_local(async move {
                match fetch_free_positions().await {
                    Ok(tokens) => free_positions.set(tokens),
                    Err(e) => {
                        report_client_error("a003_operation", e);
                        toasts.error("Falha ao carregar posições livres");
                    }
                }
            });
        }
    });

    let on_position_select = Callback::new(move |token: Option<PositionToken>| {
        position.set(token);
    });

    let can_save = Memo::new(move |_| {
        if container.get().is_none() {
            return false;
        }
        if needs_position.get() && position.get().is_none() {
            return false;
        }
        !saving.get()
    });

    let save = move |_| {
        let Some(picked) = container.get_untracked() else {
            return;
        };
        let container_id = match Uuid::parse_str(&picked.id) {
            Ok(id) => id,
            Err(_) => {
                toasts.error("Container com identificador inválido");
                return;
            }
        };

        let request = CreateOperationRequest {
            tipo: tipo.get_untracked().code().to_string(),
            container_id,
            posicao: position.get_untracked().map(|t| t.to_string()),
            observacao: {
                let text = observacao.get_untracked();
                if text.trim().is_empty() {
                    None
                } else {
                    Some(text)
                }
            },
        };

        saving.set(true);
        spawn_local(async move {
            match submit_operation(&request).await {
                Ok(()) => {
                    toasts.success("Operação registrada");
                    on_saved.run(());
                }
                Err(e) => {
                    report_client_error("a003_operation", e);
                    toasts.error("Falha ao registrar a operação");
                }
            }
            saving.set(false);
        });
    };

    view! {
        <div class="operation-details">
            <h3>"Nova operação"</h3>

            <div class="form-field">
                <label>"Tipo de operação"</label>
                <select on:change=move |ev| {
                    if let Some(op) = OperationType::from_code(&event_target_value(&ev)) {
                        tipo.set(op);
                    }
                }>
                    {OperationType::all()
                        .into_iter()
                        .map(|op| {
                            view! {
                                <option
                                    value=op.code()
                                    selected=move || tipo.get() == op
                                >
                                    {op.display_name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-field">
                <label>"Container"</label>
                <div class="form-field__picker">
                    <span class="form-field__value">
                        {move || match container.get() {
                            Some(c) => format!("{} — {}", c.numero, c.armador),
                            None => "Nenhum container selecionado".to_string(),
                        }}
                    </span>
                    <button
                        class="button button--secondary"
                        on:click=move |_| show_picker.set(true)
                    >
                        "Escolher..."
                    </button>
                </div>
            </div>

            {move || {
                if show_picker.get() {
                    let initial = container.get().map(|c| c.id);
                    Some(view! {
                        <div class="operation-details__picker">
                            <ContainerPicker
                                initial_selected_id=initial
                                on_confirm={move |picked: Option<ContainerPickerItem>| {
                                    if picked.is_some() {
                                        container.set(picked);
                                    }
                                    show_picker.set(false);
                                }}
                                on_cancel={move |_| show_picker.set(false)}
                            />
                        </div>
                    })
                } else {
                    None
                }
            }}

            {move || {
                if needs_position.get() {
                    Some(view! {
                        <div class="form-field">
                            <label>"Posição de destino"</label>
                            <PositionSelector
                                positions=Signal::derive(move || free_positions.get())
                                on_select=on_position_select
                                selected=Signal::derive(move || position.get())
                            />
                        </div>
                    })
                } else {
                    None
                }
            }}

            <div class="form-field">
                <label>"Observações"</label>
                <textarea
                    prop:value=move || observacao.get()
                    on:input=move |ev| observacao.set(event_target_value(&ev))
                    placeholder="Opcional"
                ></textarea>
            </div>

            <div class="form-actions">
                <button
                    class="button button--primary"
                    disabled=move || !can_save.get()
                    on:click=save
                >
                    {move || if saving.get() { "Salvando..." } else { "Salvar" }}
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancelar"
                </button>
            </div>
        </div>
    }
}

async fn fetch_free_positions() -> Result<Vec<PositionToken>, String> {
    let resp = Request::get(&api_url("/api/patio/posicoes?status=livre"))
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

    // Ocupadas e tokens malformados ficam de fora, em silêncio.
    Ok(parsed
        .posicoes
        .iter()
        .filter(|r| !r.ocupada)
        .filter_map(|r| PositionToken::parse_opt(&r.posicao))
        .collect())
}

async fn submit_operation(request: &CreateOperationRequest) -> Result<(), String> {
    let resp = Request::post(&api_url("/api/operacoes"))
        .header("Content-Type", "application/json")
        .json(request)
        .map_err(|e| format!("{e}"))?
        .send()
        .await
        .map_err(|e| format!("network error: {e}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = resp.text().await.map_err(|e| format!("{e}"))?;
    let envelope: ApiEnvelope<serde_json::Value> =
        serde_json::from_str(&text).map_err(|e| format!("parse error: {e}"))?;
    envelope.into_result().map(|_| ())
}
