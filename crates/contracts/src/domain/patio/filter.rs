use super::position::{Bay, PositionToken};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Critérios opcionais de filtragem de posições. Campos ausentes não
/// restringem nada; os presentes são combinados com E lógico.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositionFilter {
    #[serde(default)]
    pub bay: Option<Bay>,
    #[serde(default)]
    pub height: Option<u8>,
    #[serde(default)]
    pub search: Option<String>,
}

impl PositionFilter {
    pub fn is_empty(&self) -> bool {
        self.bay.is_none() && self.height.is_none() && self.search.is_none()
    }

    /// Quantos critérios estão ativos (para o badge do painel de filtros).
    pub fn active_count(&self) -> usize {
        [
            self.bay.is_some(),
            self.height.is_some(),
            self.search.as_deref().is_some_and(|s| !s.trim().is_empty()),
        ]
        .iter()
        .filter(|v| **v)
        .count()
    }

    /// O token satisfaz todos os critérios presentes?
    ///
    /// A busca textual é case-insensitive e cobre tanto a forma canônica
    /// ("C07-3") quanto a descrição legível ("Baia C, Posição 7, Altura 3").
    pub fn matches(&self, token: &PositionToken) -> bool {
        if let Some(bay) = self.bay {
            if token.bay != bay {
                return false;
            }
        }
        if let Some(height) = self.height {
            if token.height != height {
                return false;
            }
        }
        if let Some(search) = self.search.as_deref() {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() {
                let canonical = token.to_string().to_lowercase();
                let description = token.description().to_lowercase();
                if !canonical.contains(&needle) && !description.contains(&needle) {
                    return false;
                }
            }
        }
        true
    }
}

/// Subconjunto que satisfaz o filtro, ordenado por (baia, posição, altura).
pub fn filter_positions(tokens: &[PositionToken], filter: &PositionFilter) -> Vec<PositionToken> {
    let mut result: Vec<PositionToken> = tokens
        .iter()
        .filter(|t| filter.matches(t))
        .copied()
        .collect();
    result.sort();
    result
}

/// Particiona por baia, preservando a ordem de cada grupo.
///
/// O mapa é ordenado pela baia; zero tokens resultam em mapa vazio.
pub fn group_by_bay(tokens: &[PositionToken]) -> BTreeMap<Bay, Vec<PositionToken>> {
    let mut sorted: Vec<PositionToken> = tokens.to_vec();
    sorted.sort();

    let mut groups: BTreeMap<Bay, Vec<PositionToken>> = BTreeMap::new();
    for token in sorted {
        groups.entry(token.bay).or_default().push(token);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &[&str]) -> Vec<PositionToken> {
        input
            .iter()
            .filter_map(|s| PositionToken::parse_opt(s))
            .collect()
    }

    #[test]
    fn filtro_por_baia_retorna_ordenado() {
        let all = tokens(&["C11-1", "A01-1", "C02-3", "B05-2", "C02-1"]);
        let filter = PositionFilter {
            bay: Some(Bay::C),
            ..Default::default()
        };
        let result = filter_positions(&all, &filter);
        let strings: Vec<String> = result.iter().map(|t| t.to_string()).collect();
        assert_eq!(strings, vec!["C02-1", "C02-3", "C11-1"]);
    }

    #[test]
    fn filtro_combina_criterios() {
        let all = tokens(&["A01-1", "A01-2", "B01-2", "A03-2"]);
        let filter = PositionFilter {
            bay: Some(Bay::A),
            height: Some(2),
            ..Default::default()
        };
        let result = filter_positions(&all, &filter);
        let strings: Vec<String> = result.iter().map(|t| t.to_string()).collect();
        assert_eq!(strings, vec!["A01-2", "A03-2"]);
    }

    #[test]
    fn busca_textual_case_insensitive() {
        let all = tokens(&["A01-1", "B07-2", "C07-3"]);

        // bate na forma canônica
        let filter = PositionFilter {
            search: Some("c07".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_positions(&all, &filter).len(), 1);

        // bate na descrição legível
        let filter = PositionFilter {
            search: Some("posição 7".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_positions(&all, &filter).len(), 2);
    }

    #[test]
    fn filtro_vazio_retorna_tudo_ordenado() {
        let all = tokens(&["E01-1", "A02-1", "A01-5"]);
        let result = filter_positions(&all, &PositionFilter::default());
        let strings: Vec<String> = result.iter().map(|t| t.to_string()).collect();
        assert_eq!(strings, vec!["A01-5", "A02-1", "E01-1"]);
    }

    #[test]
    fn agrupamento_por_baia() {
        let all = tokens(&["B02-1", "A11-1", "A01-1", "B01-3"]);
        let groups = group_by_bay(&all);
        assert_eq!(groups.len(), 2);
        let a: Vec<String> = groups[&Bay::A].iter().map(|t| t.to_string()).collect();
        assert_eq!(a, vec!["A01-1", "A11-1"]);
        let b: Vec<String> = groups[&Bay::B].iter().map(|t| t.to_string()).collect();
        assert_eq!(b, vec!["B01-3", "B02-1"]);
    }

    #[test]
    fn agrupamento_de_vazio_e_mapa_vazio() {
        let groups = group_by_bay(&[]);
        assert!(groups.is_empty());
    }

    #[test]
    fn contagem_de_filtros_ativos() {
        assert_eq!(PositionFilter::default().active_count(), 0);
        let filter = PositionFilter {
            bay: Some(Bay::A),
            search: Some("  ".to_string()),
            ..Default::default()
        };
        // busca só de espaços não conta como filtro ativo
        assert_eq!(filter.active_count(), 1);
    }
}
