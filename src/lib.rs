#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod auth;
pub mod config;
pub mod model;
pub mod remote;
pub mod tui;
