//! Platform-agnostic plumbing shared by every view.

pub mod config;
pub mod effects;
pub mod links;
pub mod platform;
pub mod timing;
