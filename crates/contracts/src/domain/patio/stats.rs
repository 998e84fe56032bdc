use super::position::{Bay, PositionToken};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Classe de tamanho de container que um slot comporta.
///
/// Convenção fixa do layout do pátio no backend: posições ímpares recebem
/// containers de 20 pés, pares recebem 40 pés. Contrato externo — não
/// rederivar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    Teu20,
    Teu40,
}

impl SizeClass {
    pub fn of(token: &PositionToken) -> Self {
        if token.position % 2 == 1 {
            SizeClass::Teu20
        } else {
            SizeClass::Teu40
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SizeClass::Teu20 => "20",
            SizeClass::Teu40 => "40",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SizeClass::Teu20 => "20 pés",
            SizeClass::Teu40 => "40 pés",
        }
    }
}

/// Estatísticas agregadas sobre uma coleção de posições.
///
/// Funções puras sobre entrada imutável; nada aqui guarda estado.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YardStats {
    pub total: usize,
    pub per_bay: BTreeMap<Bay, usize>,
    pub per_height: BTreeMap<u8, usize>,
    pub teu20: usize,
    pub teu40: usize,
}

impl YardStats {
    pub fn collect<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a PositionToken>,
    {
        let mut stats = YardStats::default();
        for token in tokens {
            stats.total += 1;
            *stats.per_bay.entry(token.bay).or_insert(0) += 1;
            *stats.per_height.entry(token.height).or_insert(0) += 1;
            match SizeClass::of(token) {
                SizeClass::Teu20 => stats.teu20 += 1,
                SizeClass::Teu40 => stats.teu40 += 1,
            }
        }
        stats
    }

    pub fn count_for_bay(&self, bay: Bay) -> usize {
        self.per_bay.get(&bay).copied().unwrap_or(0)
    }

    pub fn count_for_height(&self, height: u8) -> usize {
        self.per_height.get(&height).copied().unwrap_or(0)
    }
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
    fn classe_por_paridade_da_posicao() {
        let odd: PositionToken = "A01-1".parse().unwrap();
        let even: PositionToken = "A02-1".parse().unwrap();
        let odd2: PositionToken = "A03-1".parse().unwrap();

        assert_ne!(SizeClass::of(&odd), SizeClass::of(&even));
        assert_eq!(SizeClass::of(&odd), SizeClass::of(&odd2));
        assert_eq!(SizeClass::of(&odd), SizeClass::Teu20);
        assert_eq!(SizeClass::of(&even), SizeClass::Teu40);
    }

    #[test]
    fn agregacao_completa() {
        let all = tokens(&["A01-1", "A02-1", "A02-2", "B01-1", "E20-5"]);
        let stats = YardStats::collect(&all);

        assert_eq!(stats.total, 5);
        assert_eq!(stats.count_for_bay(Bay::A), 3);
        assert_eq!(stats.count_for_bay(Bay::B), 1);
        assert_eq!(stats.count_for_bay(Bay::C), 0);
        assert_eq!(stats.count_for_height(1), 3);
        assert_eq!(stats.count_for_height(2), 1);
        assert_eq!(stats.count_for_height(5), 1);
        // A01 e B01 ímpares; A02 (x2) e E20 pares
        assert_eq!(stats.teu20, 2);
        assert_eq!(stats.teu40, 3);
    }

    #[test]
    fn agregacao_de_vazio() {
        let stats = YardStats::collect(&[]);
        assert_eq!(stats.total, 0);
        assert!(stats.per_bay.is_empty());
        assert!(stats.per_height.is_empty());
    }
}
