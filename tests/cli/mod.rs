mod config;
mod logging;
mod misc;
mod search;
mod show;
pub mod support;
