use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Formatação e status dos indicadores
// ---------------------------------------------------------------------------

/// Como formatar o valor numérico no frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

/// Status visual do indicador (define a cor do card).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

// ---------------------------------------------------------------------------
// Indicadores do pátio
// ---------------------------------------------------------------------------

/// Payload de `GET /api/patio/indicadores`.
///
/// O backend calcula sobre o inventário completo; o frontend só exibe.
/// O detalhamento por baia/altura o cliente deriva localmente das posições
/// via `YardStats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatioIndicators {
    pub total_posicoes: usize,
    pub ocupadas: usize,
    pub livres: usize,
    /// Percentual 0-100.
    pub ocupacao_percent: f64,
    #[serde(default)]
    pub operacoes_hoje: Option<usize>,
}

/// Resposta com envelope próprio do endpoint legado de indicadores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatioIndicatorsResponse {
    pub success: bool,
    #[serde(default)]
    pub indicadores: Option<PatioIndicators>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodifica_indicadores() {
        let json = r#"{
            "success": true,
            "indicadores": {
                "total_posicoes": 500,
                "ocupadas": 120,
                "livres": 380,
                "ocupacao_percent": 24.0
            }
        }"#;
        let resp: PatioIndicatorsResponse = serde_json::from_str(json).unwrap();
        let ind = resp.indicadores.unwrap();
        assert_eq!(ind.total_posicoes, 500);
        assert_eq!(ind.operacoes_hoje, None);
    }
}
