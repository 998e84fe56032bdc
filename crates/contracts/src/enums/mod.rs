pub mod operation_type;

pub use operation_type::OperationType;
