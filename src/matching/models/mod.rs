pub mod explain;
pub mod types;
