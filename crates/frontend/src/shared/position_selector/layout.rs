//! Estratégia de layout do seletor de posições.
//!
//! O legado tinha cópias paralelas do seletor (tabela, cards, matriz,
//! touch); aqui é um único componente parametrizado. A preferência do
//! usuário persiste em localStorage.

use web_sys::window;

/// Layouts disponíveis do seletor.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SelectorLayout {
    #[default]
    Table,
    Cards,
    Matrix,
    Touch,
}

impl SelectorLayout {
    /// Nome usado na classe CSS e no localStorage.
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectorLayout::Table => "table",
            SelectorLayout::Cards => "cards",
            SelectorLayout::Matrix => "matrix",
            SelectorLayout::Touch => "touch",
        }
    }

    /// Rótulo exibido no alternador de layout.
    pub fn display_name(&self) -> &'static str {
        match self {
            SelectorLayout::Table => "Tabela",
            SelectorLayout::Cards => "Cards",
            SelectorLayout::Matrix => "Matriz",
            SelectorLayout::Touch => "Touch",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "cards" => SelectorLayout::Cards,
            "matrix" => SelectorLayout::Matrix,
            "touch" => SelectorLayout::Touch,
            _ => SelectorLayout::Table,
        }
    }

    pub fn all() -> [SelectorLayout; 4] {
        [
            SelectorLayout::Table,
            SelectorLayout::Cards,
            SelectorLayout::Matrix,
            SelectorLayout::Touch,
        ]
    }
}

const LAYOUT_STORAGE_KEY: &str = "patio-selector-layout";

/// Carrega a preferência de layout do localStorage.
pub fn load_layout_from_storage() -> SelectorLayout {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LAYOUT_STORAGE_KEY).ok().flatten())
        .map(|s| SelectorLayout::from_str(&s))
        .unwrap_or_default()
}

/// Salva a preferência de layout no localStorage.
pub fn save_layout_to_storage(layout: SelectorLayout) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LAYOUT_STORAGE_KEY, layout.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_por_string() {
        for layout in SelectorLayout::all() {
            assert_eq!(SelectorLayout::from_str(layout.as_str()), layout);
        }
        // valor desconhecido cai no default
        assert_eq!(SelectorLayout::from_str("3d"), SelectorLayout::Table);
    }
}
