// Public site: role-scoped skills and projects, the looping carousel that
// presents them, and the profile pages (about statements, history timeline).

pub mod carousel;
pub mod display;
pub mod handlers;
pub mod profile;
pub mod role_filter;

pub use role_filter::{filter_by_role, RoleScope};
