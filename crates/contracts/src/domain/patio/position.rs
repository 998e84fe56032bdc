use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Baia
// ============================================================================

/// Fileira do pátio. O pátio tem cinco fileiras fixas, A até E.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Bay {
    A,
    B,
    C,
    D,
    E,
}

impl Bay {
    /// Letra maiúscula usada no token e na API.
    pub fn as_char(&self) -> char {
        match self {
            Bay::A => 'A',
            Bay::B => 'B',
            Bay::C => 'C',
            Bay::D => 'D',
            Bay::E => 'E',
        }
    }

    /// Parse a partir da letra. Sensível a caixa: só maiúsculas são válidas.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Bay::A),
            'B' => Some(Bay::B),
            'C' => Some(Bay::C),
            'D' => Some(Bay::D),
            'E' => Some(Bay::E),
            _ => None,
        }
    }

    /// Todas as fileiras, na ordem do pátio.
    pub fn all() -> [Bay; 5] {
        [Bay::A, Bay::B, Bay::C, Bay::D, Bay::E]
    }

    /// Nome exibido na UI, ex.: "Baia C".
    pub fn display_name(&self) -> String {
        format!("Baia {}", self.as_char())
    }
}

impl fmt::Display for Bay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ============================================================================
// Token de posição
// ============================================================================

/// Erro de parse do token de posição.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionTokenError {
    #[error("token de posição vazio")]
    Empty,
    #[error("baia inválida: '{0}' (esperado A-E maiúsculo)")]
    InvalidBay(char),
    #[error("token fora do formato BNN-A: '{0}'")]
    InvalidFormat(String),
}

/// Uma posição endereçável do pátio: fileira, coluna e altura de empilhamento.
///
/// A forma canônica é `{baia}{posicao:02}-{altura}` (ex.: `C07-3`) e faz
/// round-trip exato por parse→format. A ordem derivada segue a chave
/// (baia, posição, altura) com comparação numérica — a coluna "11" vem
/// depois da "2", nunca antes.
///
/// A gramática não impõe faixa: `B99-9` parseia. As faixas documentadas
/// (posição 1-20, altura 1-5) são convenção de layout do backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositionToken {
    pub bay: Bay,
    pub position: u8,
    pub height: u8,
}

impl PositionToken {
    pub fn new(bay: Bay, position: u8, height: u8) -> Self {
        Self {
            bay,
            position,
            height,
        }
    }

    /// Forma silenciosa do parse, para caminhos de UI que descartam
    /// tokens malformados sem alarde.
    pub fn parse_opt(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Descrição legível, ex.: "Baia C, Posição 7, Altura 3".
    pub fn description(&self) -> String {
        format!(
            "Baia {}, Posição {}, Altura {}",
            self.bay.as_char(),
            self.position,
            self.height
        )
    }
}

impl fmt::Display for PositionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}-{}", self.bay, self.position, self.height)
    }
}

impl FromStr for PositionToken {
    type Err = PositionTokenError;

    /// Gramática: `^[A-E]\d{2}-\d+$`. A posição tem exatamente dois
    /// dígitos; a altura não tem largura fixa.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let bay_char = chars.next().ok_or(PositionTokenError::Empty)?;
        let bay = Bay::from_char(bay_char).ok_or(PositionTokenError::InvalidBay(bay_char))?;

        let rest = &s[bay_char.len_utf8()..];
        let (pos_part, height_part) = rest
            .split_once('-')
            .ok_or_else(|| PositionTokenError::InvalidFormat(s.to_string()))?;

        if pos_part.len() != 2 || !pos_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PositionTokenError::InvalidFormat(s.to_string()));
        }
        if height_part.is_empty() || !height_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PositionTokenError::InvalidFormat(s.to_string()));
        }

        let position: u8 = pos_part
            .parse()
            .map_err(|_| PositionTokenError::InvalidFormat(s.to_string()))?;
        let height: u8 = height_part
            .parse()
            .map_err(|_| PositionTokenError::InvalidFormat(s.to_string()))?;

        Ok(Self {
            bay,
            position,
            height,
        })
    }
}

// ============================================================================
// Comparação no nível de string
// ============================================================================

/// Compara dois tokens ainda em forma de string.
///
/// Se qualquer um dos lados não parseia, o par é tratado como igual —
/// uma ordenação estável mantém entradas malformadas na ordem original
/// em vez de falhar.
pub fn compare_tokens(a: &str, b: &str) -> Ordering {
    match (PositionToken::parse_opt(a), PositionToken::parse_opt(b)) {
        (Some(ta), Some(tb)) => ta.cmp(&tb),
        _ => Ordering::Equal,
    }
}

/// Ordena tokens em forma de string pela chave (baia, posição, altura).
pub fn sort_token_strings(tokens: &mut [String]) {
    tokens.sort_by(|a, b| compare_tokens(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_canonico() {
        for s in ["A01-1", "C07-3", "E20-5", "B11-2"] {
            let token: PositionToken = s.parse().unwrap();
            assert_eq!(token.to_string(), s);
        }
    }

    #[test]
    fn parse_campos() {
        let token: PositionToken = "C07-3".parse().unwrap();
        assert_eq!(token.bay, Bay::C);
        assert_eq!(token.position, 7);
        assert_eq!(token.height, 3);
    }

    #[test]
    fn parse_rejeita_malformados() {
        assert!("Z01-1".parse::<PositionToken>().is_err()); // baia fora de A-E
        assert!("A1-1".parse::<PositionToken>().is_err()); // posição sem zero à esquerda
        assert!("a01-1".parse::<PositionToken>().is_err()); // minúscula
        assert!("A011".parse::<PositionToken>().is_err()); // sem separador
        assert!("A01-".parse::<PositionToken>().is_err()); // altura ausente
        assert!("A01-x".parse::<PositionToken>().is_err());
        assert!("".parse::<PositionToken>().is_err());
        assert_eq!(PositionToken::parse_opt("Z01-1"), None);
        assert_eq!(PositionToken::parse_opt("A1-1"), None);
    }

    #[test]
    fn parse_nao_valida_faixa() {
        // A gramática aceita valores fora das faixas documentadas.
        let token: PositionToken = "B99-9".parse().unwrap();
        assert_eq!(token.position, 99);
        assert_eq!(token.height, 9);
    }

    #[test]
    fn ordem_numerica_da_posicao() {
        // Regressão: "11" < "2" lexicograficamente, mas 2 < 11 numericamente.
        let mut tokens = vec![
            "A11-1".to_string(),
            "A01-1".to_string(),
            "A02-3".to_string(),
        ];
        sort_token_strings(&mut tokens);
        assert_eq!(tokens, vec!["A01-1", "A02-3", "A11-1"]);
    }

    #[test]
    fn ordem_total_consistente() {
        let a: PositionToken = "A01-1".parse().unwrap();
        let b: PositionToken = "A01-2".parse().unwrap();
        let c: PositionToken = "B01-1".parse().unwrap();
        assert!(a < b && b < c);
        assert!(a < c); // transitividade
        assert_eq!(b.cmp(&a), Ordering::Greater); // antissimetria
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    #[test]
    fn malformados_comparam_iguais() {
        assert_eq!(compare_tokens("???", "A01-1"), Ordering::Equal);
        assert_eq!(compare_tokens("A01-1", "???"), Ordering::Equal);

        // sort estável: entradas não parseáveis mantêm a ordem relativa
        let mut tokens = vec![
            "zzz".to_string(),
            "B01-1".to_string(),
            "abc".to_string(),
            "A01-1".to_string(),
        ];
        sort_token_strings(&mut tokens);
        let pos_zzz = tokens.iter().position(|t| t == "zzz").unwrap();
        let pos_abc = tokens.iter().position(|t| t == "abc").unwrap();
        assert!(pos_zzz < pos_abc);
    }
}
