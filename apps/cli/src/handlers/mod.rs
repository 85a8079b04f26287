pub mod copyright;
pub mod list;
pub mod resolve;
