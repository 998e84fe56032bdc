//! Utilidades de comunicação frontend-backend.

use contracts::shared::logger::CreateLogRequest;
use leptos::task::spawn_local;

/// URL base da API, derivada do window.location atual.
///
/// O backend atende na porta 3000 do mesmo host. Fora do browser (sem
/// window) devolve string vazia e a chamada seguinte falha de forma
/// controlada.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Monta a URL completa a partir de um path (deve começar com "/api/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Reporta uma falha de cliente no console e, em melhor esforço, no sink
/// de logs do servidor. Falha do próprio sink é ignorada.
pub fn report_client_error(category: &str, message: String) {
    log::error!("[{}] {}", category, message);

    let entry = CreateLogRequest::client_error(category, message);
    spawn_local(async move {
        if let Ok(req) = gloo_net::http::Request::post(&api_url("/api/logs"))
            .header("Content-Type", "application/json")
            .json(&entry)
        {
            _ = req.send().await;
        }
    });
}
