pub mod macro_record;
pub mod row;

pub use macro_record::*;
pub use row::*;
