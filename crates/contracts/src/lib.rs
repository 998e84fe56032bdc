//! Contratos compartilhados entre o frontend e a API do pátio.
//!
//! Este crate não depende de wasm: tudo aqui é modelo de domínio puro
//! (codec de posições, filtros, estatísticas) e DTOs de transporte.

pub mod domain;
pub mod enums;
pub mod shared;
