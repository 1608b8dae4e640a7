// Admin dashboard: aggregates projects and skills into counts, percentage
// distributions and a bounded recent-activity feed.
// Pure transforms over a snapshot; rebuilt on every request, never mutated.

pub mod activity;
pub mod handlers;
pub mod model;
pub mod transform;

pub use transform::{transform_dashboard_data, DEFAULT_RECENT_LIMIT};
