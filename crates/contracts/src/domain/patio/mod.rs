//! Modelo de posições do pátio.
//!
//! Uma posição é endereçada pelo token `{baia}{posicao:02}-{altura}`
//! (ex.: `C07-3`). Este módulo concentra o codec do token, a ordenação
//! total, filtros/agrupamento e as estatísticas de ocupação.

pub mod filter;
pub mod position;
pub mod stats;

// Re-exports
pub use filter::{filter_positions, group_by_bay, PositionFilter};
pub use position::{compare_tokens, sort_token_strings, Bay, PositionToken, PositionTokenError};
pub use stats::{SizeClass, YardStats};
