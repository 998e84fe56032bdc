use serde::{Deserialize, Serialize};

/// Tipos de operação de pátio definidos pelo backend.
///
/// Para a UI são rótulos opacos: o fluxo de negócio de cada tipo vive do
/// lado do servidor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationType {
    Vistoria,
    Descarga,
    Carregamento,
    Movimentacao,
}

impl OperationType {
    /// Código usado na API.
    pub fn code(&self) -> &'static str {
        match self {
            OperationType::Vistoria => "vistoria",
            OperationType::Descarga => "descarga",
            OperationType::Carregamento => "carregamento",
            OperationType::Movimentacao => "movimentacao",
        }
    }

    /// Nome exibido na UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            OperationType::Vistoria => "Vistoria",
            OperationType::Descarga => "Descarga",
            OperationType::Carregamento => "Carregamento",
            OperationType::Movimentacao => "Movimentação",
        }
    }

    /// A operação exige escolher uma posição de destino no pátio?
    /// Descarga e movimentação colocam o container em um slot; vistoria e
    /// carregamento atuam sobre onde ele já está.
    pub fn requires_target_position(&self) -> bool {
        matches!(self, OperationType::Descarga | OperationType::Movimentacao)
    }

    pub fn all() -> Vec<OperationType> {
        vec![
            OperationType::Vistoria,
            OperationType::Descarga,
            OperationType::Carregamento,
            OperationType::Movimentacao,
        ]
    }

    /// Parse a partir do código da API.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "vistoria" => Some(OperationType::Vistoria),
            "descarga" => Some(OperationType::Descarga),
            "carregamento" => Some(OperationType::Carregamento),
            "movimentacao" => Some(OperationType::Movimentacao),
            _ => None,
        }
    }
}

impl ToString for OperationType {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codigo_roundtrip() {
        for op in OperationType::all() {
            assert_eq!(OperationType::from_code(op.code()), Some(op));
        }
        assert_eq!(OperationType::from_code("inventario"), None);
    }
}
