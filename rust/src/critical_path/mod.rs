//! Critical Path Method scheduling.
//!
//! Orders the precedence graph once, runs a forward pass for earliest
//! times and a backward pass for latest times, then derives slack and the
//! critical path. Also provides the network diagram layout.

mod calculation;
mod layout;
mod ordering;
mod types;

pub use calculation::{calculate_schedule, recompute_schedule};
pub use layout::{network_layout, LayoutEdge, LayoutNode, NetworkLayout};
pub use ordering::topological_order;
pub use types::{ActivityTiming, CriticalPathError, ScheduleResult};
