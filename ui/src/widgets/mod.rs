pub mod members;
pub mod mobile_nav;

pub use members::{MembersTableCtx, members_table};
pub use mobile_nav::{NavCtx, NavItem, mobile_nav, nav_items};
