//! Constantes de categoria de página.
//!
//! Toda página renderizada numa aba declara:
//!   - `id` HTML no formato `{entity}--{category}` (ex.: `"a001_container--list"`)
//!   - `data-page-category` com uma das constantes abaixo
//!
//! O separador `--` torna o nome buscável: copie o id no inspetor do
//! browser, cole na busca da IDE e caia direto no diretório do módulo.

/// Lista de registros — tabela com filtros/paginação.
pub const PAGE_CAT_LIST: &str = "list";

/// Formulário de detalhe/edição de um registro.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Dashboard analítico.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Página de sistema/administração.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Design intencionalmente próprio — isento das checagens estruturais.
pub const PAGE_CAT_CUSTOM: &str = "custom";

/// Valida que o id segue o formato `{entity}--{category}`.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_container--list"));
        assert!(!is_valid_page_id("a001_container"));
        assert!(!is_valid_page_id("--list"));
    }
}
