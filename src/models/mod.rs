pub mod event;
pub mod position;
pub mod time_window;
pub mod weekday;
