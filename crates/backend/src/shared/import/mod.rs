//! Разбор и проверка табличного импорта коносаментов.
//!
//! Конвейер: сырые строки файла → кандидаты → проверка → батч.
//! Батч показывается пользователю и отправляется только после
//! подтверждения; сам конвейер ничего не коммитит.

pub mod batch;
pub mod normalize;
pub mod parser;
pub mod template;
pub mod validator;

pub use batch::build_batch;
pub use normalize::normalize_date;
pub use parser::{is_blank_row, parse_row};
pub use validator::validate;
