//! Fonte única dos rótulos de aba.

/// Rótulo legível para a chave de aba. Fallback: a própria chave.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d400_patio_overview" => "Visão do Pátio",
        "a001_container" => "Containers",
        "a002_patio_position" => "Mapa do Pátio",
        "a003_operation" => "Operações",
        "s001_user" => "Meu Perfil",
        _ => "Aba",
    }
}
