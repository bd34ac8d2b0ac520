mod generate;
mod validate;

pub use generate::generate;
pub use validate::validate;
