pub mod dispatch;
pub mod search;
pub mod show;
