pub mod connector;
pub mod handle;
pub mod last_error;
pub mod shape;
