pub mod layout;
pub mod logic;
