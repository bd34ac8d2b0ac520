pub mod codegen;
pub mod constants;
pub mod schema;
