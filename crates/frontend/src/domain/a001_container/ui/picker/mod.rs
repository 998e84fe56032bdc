use crate::shared::api_utils::api_url;
use crate::shared::picker::{GenericPicker, PickerItem, TableDisplayable};
use contracts::shared::api::{ApiEnvelope, ContainerRecord};
use gloo_net::http::Request;
use leptos::prelude::*;

/// Item do picker de containers.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerPickerItem {
    pub id: String,
    pub numero: String,
    pub armador: String,
    pub posicao_atual: Option<String>,
}

impl From<ContainerRecord> for ContainerPickerItem {
    fn from(c: ContainerRecord) -> Self {
        Self {
            id: c.id.to_string(),
            numero: c.numero,
            armador: c.armador,
            posicao_atual: c.posicao_atual,
        }
    }
}

impl PickerItem for ContainerPickerItem {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn display_name(&self) -> String {
        self.numero.clone()
    }
}

impl TableDisplayable for ContainerPickerItem {
    fn code(&self) -> String {
        self.numero.clone()
    }

    fn description(&self) -> String {
        match &self.posicao_atual {
            Some(pos) => format!("{} ({})", self.armador, pos),
            None => self.armador.clone(),
        }
    }
}

/// Seleção de container pelo picker genérico com busca.
#[component]
pub fn ContainerPicker<F, G>(
    /// Container pré-selecionado ao abrir
    initial_selected_id: Option<String>,
    /// Callback de confirmação
    on_confirm: F,
    /// Callback de cancelamento
    on_cancel: G,
) -> impl IntoView
where
    F: Fn(Option<ContainerPickerItem>) + 'static + Clone + Send,
    G: Fn(()) + 'static + Clone + Send,
{
    let (items, set_items) = signal::<Vec<ContainerPickerItem>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    // Carga na montagem
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_containers().await {
            Ok(records) => {
                let picker_items: Vec<ContainerPickerItem> =
                    records.into_iter().map(Into::into).collect();
                set_items.set(picker_items);
                set_error.set(None);
            }
            Err(e) => set_error.set(Some(e)),
        }
        set_loading.set(false);
    });

    view! {
        <GenericPicker
            items=items
            error=error
            loading=loading
            initial_selected_id=initial_selected_id
            on_confirm=on_confirm
            on_cancel=on_cancel
            title="Selecionar container".to_string()
        />
    }
}

async fn fetch_containers() -> Result<Vec<ContainerPickerItem>, String> {
    let resp = Request::get(&api_url("/api/containers"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("{e}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = resp.text().await.map_err(|e| format!("{e}"))?;
    let envelope: ApiEnvelope<Vec<ContainerRecord>> =
        serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(envelope
        .into_result()?
        .into_iter()
        .map(Into::into)
        .collect())
}
