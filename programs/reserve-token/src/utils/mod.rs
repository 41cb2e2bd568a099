pub mod identifier;
pub mod time;
