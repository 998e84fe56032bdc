pub mod a001_container;
pub mod a002_patio_position;
pub mod a003_operation;
