use serde::{Deserialize, Serialize};

/// Registro de log persistido pelo servidor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub timestamp: String,
    /// "client" ou "server"
    pub source: String,
    pub level: String,
    pub category: String,
    pub message: String,
}

/// DTO de `POST /api/logs` — melhor esforço, o cliente ignora falhas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLogRequest {
    pub source: String,
    pub level: String,
    pub category: String,
    pub message: String,
}

impl CreateLogRequest {
    /// Entrada de erro originada no cliente.
    pub fn client_error(category: &str, message: String) -> Self {
        Self {
            source: "client".to_string(),
            level: "error".to_string(),
            category: category.to_string(),
            message,
        }
    }
}
