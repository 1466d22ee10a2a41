//! CLI Commands

pub mod browse;
pub mod status;
pub mod update;
