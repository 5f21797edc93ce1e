//! Personal drama tracker — a CSV-backed list with per-drama folders, browser
//! forms for editing, and a PDF export.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod folders;
pub mod http;
pub mod report;
pub mod store;
