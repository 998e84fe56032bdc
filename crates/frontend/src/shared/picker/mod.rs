//! Sistema de seleção de registros em modal.
//!
//! Implemente os traits para o seu tipo de item e use `GenericPicker`:
//! clique seleciona, duplo clique confirma, busca filtra no cliente.

pub mod component;
pub mod traits;

pub use component::GenericPicker;
pub use traits::{PickerItem, TableDisplayable};
