//! Command implementations for the padctl CLI

pub mod demo;
pub mod timing;
