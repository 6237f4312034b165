//! Task-selection domain models.
//!
//! Provides the data types for a single-resource, time-windowed,
//! profit-maximizing selection problem and its solutions.
//!
//! # Domain Mappings
//!
//! | u-select | Earth observation | Broadcasting | Maintenance |
//! |----------|-------------------|--------------|-------------|
//! | Task | Imaging request | Ad slot | Service job |
//! | Window | Visibility pass | Air window | Access window |
//! | Profit | Image value | Revenue | Priority value |
//! | Schedule | Observation plan | Playlist | Crew plan |

mod model;
mod schedule;
mod task;
mod window;

pub use model::TaskModel;
pub use schedule::{Schedule, ScheduledTask, Violation, ViolationType};
pub use task::{Position, Task};
pub use window::TimeWindow;
