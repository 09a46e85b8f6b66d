pub mod args;
pub mod commands;
pub mod document;
pub mod error;
pub mod index;
pub mod logging;
pub mod plan;
pub mod report;
pub mod visuals;
