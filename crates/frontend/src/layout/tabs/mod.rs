//! Gestão de abas: registry (key → View) e rótulos.

pub mod registry;
pub mod tab_labels;

pub use registry::render_tab_content;
pub use tab_labels::tab_label_for_key;
