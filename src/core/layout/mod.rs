pub mod day_axis;
pub mod drag;
pub mod sizing;
pub mod snap;
pub mod week_grid;

pub use day_axis::DayAxis;
pub use sizing::{CalendarSizing, SizingRules};
pub use week_grid::{CrossMidnight, PlacedEvent, WeekGrid, WeekLayout};
