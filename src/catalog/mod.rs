pub mod goals;
pub mod history;
pub mod pool;

pub use goals::{decompose_goal, Goal, GoalKind, GoalRegistry};
pub use history::{Achievement, CompletedTask, TaskHistory};
pub use pool::TaskCatalog;
