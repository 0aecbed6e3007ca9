pub mod aggregate;
pub mod import;
