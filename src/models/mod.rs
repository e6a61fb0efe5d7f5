pub mod mode;
pub mod row;
pub mod target;
pub mod value;
