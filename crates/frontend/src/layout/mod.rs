pub mod global_context;
pub mod header;

pub use global_context::{AppGlobalContext, AppTab};
