//! DTOs da API REST do pátio.
//!
//! O cliente não valida schema além de campos opcionais: payloads que o
//! backend possui (containers, operações) são exibidos como chegam.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Envelope genérico
// ---------------------------------------------------------------------------

/// Envelope padrão das respostas JSON: flag `success` + payload opcional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// `data` quando `success`, senão a mensagem do backend como erro.
    pub fn into_result(self) -> Result<T, String> {
        if self.success {
            self.data
                .ok_or_else(|| "resposta sem payload".to_string())
        } else {
            Err(self
                .message
                .unwrap_or_else(|| "erro não especificado pelo servidor".to_string()))
        }
    }
}

// ---------------------------------------------------------------------------
// Posições do pátio
// ---------------------------------------------------------------------------

/// Um slot do pátio como reportado pelo backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionRecord {
    /// Token canônico, ex.: "C07-3".
    pub posicao: String,
    pub ocupada: bool,
    /// Número do container ocupante, quando houver.
    #[serde(default)]
    pub container: Option<String>,
}

/// Resposta de `GET /api/patio/posicoes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatioPositionsResponse {
    pub success: bool,
    #[serde(default)]
    pub posicoes: Vec<PositionRecord>,
}

// ---------------------------------------------------------------------------
// Containers
// ---------------------------------------------------------------------------

/// Registro de container do inventário. Campos além do número e da posição
/// atual são exibidos como texto opaco.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerRecord {
    pub id: Uuid,
    /// Número ISO 6346, ex.: "MSCU1234567".
    pub numero: String,
    pub armador: String,
    pub tipo: String,
    pub status: String,
    #[serde(default)]
    pub posicao_atual: Option<String>,
    pub criado_em: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Operações
// ---------------------------------------------------------------------------

/// Operação de pátio já registrada, para a lista de recentes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationRecord {
    pub id: Uuid,
    /// Código do tipo ("vistoria", "descarga", ...).
    pub tipo: String,
    pub container: String,
    #[serde(default)]
    pub posicao: Option<String>,
    #[serde(default)]
    pub observacao: Option<String>,
    pub status: String,
    pub criado_em: DateTime<Utc>,
}

/// Corpo de `POST /api/operacoes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOperationRequest {
    pub tipo: String,
    pub container_id: Uuid,
    #[serde(default)]
    pub posicao: Option<String>,
    #[serde(default)]
    pub observacao: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_decodifica_payload() {
        let json = r#"{"success": true, "data": [{"posicao": "A01-1", "ocupada": false}]}"#;
        let envelope: ApiEnvelope<Vec<PositionRecord>> = serde_json::from_str(json).unwrap();
        let data = envelope.into_result().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].posicao, "A01-1");
        assert!(!data[0].ocupada);
        assert_eq!(data[0].container, None);
    }

    #[test]
    fn envelope_propaga_mensagem_de_erro() {
        let json = r#"{"success": false, "message": "pátio indisponível"}"#;
        let envelope: ApiEnvelope<Vec<PositionRecord>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_result().unwrap_err(), "pátio indisponível");
    }

    #[test]
    fn resposta_de_posicoes_tolera_lista_ausente() {
        let json = r#"{"success": true}"#;
        let resp: PatioPositionsResponse = serde_json::from_str(json).unwrap();
        assert!(resp.posicoes.is_empty());
    }
}
