//! Command implementations for Packfold CLI

pub mod check;
pub mod completions;
pub mod fmt;
pub mod show;
pub mod version;
