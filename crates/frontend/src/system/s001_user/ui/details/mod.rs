use crate::shared::api_utils::{api_url, report_client_error};
use crate::shared::components::password_meter::{strength_of, PasswordMeter, PasswordStrength};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::toast::ToastService;
use contracts::shared::api::ApiEnvelope;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
struct UpdateProfileRequest {
    nome: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    senha: Option<String>,
}

/// Formulário de perfil do usuário, com medidor de força de senha.
///
/// Senha vazia significa "não alterar". A troca exige força mínima média
/// e confirmação idêntica.
#[component]
pub fn UserProfileDetails() -> impl IntoView {
    let nome = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let confirmacao = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let password_problem = Memo::new(move |_| {
        let pass = senha.get();
        if pass.is_empty() {
            return None;
        }
        if strength_of(&pass) < PasswordStrength::Media {
            return Some("Senha fraca demais: use letras maiúsculas, números e símbolos");
        }
        if pass != confirmacao.get() {
            return Some("A confirmação não confere com a senha");
        }
        None
    });

    let can_save = Memo::new(move |_| {
        !nome.get().trim().is_empty()
            && !email.get().trim().is_empty()
            && password_problem.get().is_none()
            && !saving.get()
    });

    let save = move |_| {
        let request = UpdateProfileRequest {
            nome: nome.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            senha: {
                let pass = senha.get_untracked();
                if pass.is_empty() {
                    None
                } else {
                    Some(pass)
                }
            },
        };

        saving.set(true);
        spawn_local(async move {
            match submit_profile(&request).await {
                Ok(()) => {
                    toasts.success("Perfil atualizado");
                    senha.set(String::new());
                    confirmacao.set(String::new());
                }
                Err(e) => {
                    report_client_error("s001_user", e);
                    toasts.error("Falha ao atualizar o perfil");
                }
            }
            saving.set(false);
        });
    };

    view! {
        <PageFrame page_id="s001_user--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h2 class="page__title">"Meu Perfil"</h2>
            </div>

            <div class="page__content profile-form">
                <div class="form-field">
                    <label>"Nome"</label>
                    <input
                        type="text"
                        prop:value=move || nome.get()
                        on:input=move |ev| nome.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-field">
                    <label>"E-mail"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-field">
                    <label>"Nova senha"</label>
                    <input
                        type="password"
                        prop:value=move || senha.get()
                        on:input=move |ev| senha.set(event_target_value(&ev))
                        placeholder="Deixe em branco para manter a atual"
                    />
                    <PasswordMeter password=Signal::derive(move || senha.get()) />
                </div>

                <div class="form-field">
                    <label>"Confirmar senha"</label>
                    <input
                        type="password"
                        prop:value=move || confirmacao.get()
                        on:input=move |ev| confirmacao.set(event_target_value(&ev))
                    />
                </div>

                {move || {
                    password_problem.get().map(|problem| {
                        view! {
                            <div class="form-error">{problem}</div>
                        }
                    })
                }}

                <div class="form-actions">
                    <button
                        class="button button--primary"
                        disabled=move || !can_save.get()
                        on:click=save
                    >
                        {move || if saving.get() { "Salvando..." } else { "Salvar" }}
                    </button>
                </div>
            </div>
        </PageFrame>
    }
}

async fn submit_profile(request: &UpdateProfileRequest) -> Result<(), String> {
    let resp = Request::post(&api_url("/api/usuarios/perfil"))
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
