//! Registry de conteúdo de aba — fonte única do mapeamento tab.key → View.

use crate::dashboards::d400_patio_overview::ui::dashboard::PatioOverviewDashboard;
use crate::domain::a001_container::ui::list::ContainerList;
use crate::domain::a002_patio_position::ui::map::PatioMap;
use crate::domain::a003_operation::ui::list::OperationList;
use crate::system::s001_user::ui::details::UserProfileDetails;
use leptos::prelude::*;

/// Renderiza o conteúdo de uma aba pelo seu key.
///
/// Chaves desconhecidas (ex.: URL antiga num bookmark) viram um placeholder
/// em vez de erro.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "d400_patio_overview" => view! { <PatioOverviewDashboard /> }.into_any(),
        "a001_container" => view! { <ContainerList /> }.into_any(),
        "a002_patio_position" => view! { <PatioMap /> }.into_any(),
        "a003_operation" => view! { <OperationList /> }.into_any(),
        "s001_user" => view! { <UserProfileDetails /> }.into_any(),
        _ => view! {
            <div class="page">
                <p>"Conteúdo não encontrado para esta aba: " {key.to_string()}</p>
            </div>
        }
        .into_any(),
    }
}
