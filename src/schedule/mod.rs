pub mod generator;
pub mod store;
pub mod template;

pub use generator::{fill_slots, generate_daily_schedule};
pub use store::{Schedule, ScheduleEntry, ScheduleStore};
pub use template::{RoutineBlock, RoutineEntry, RoutineTemplate};
