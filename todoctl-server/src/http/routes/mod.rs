//! Route handlers organized by resource

pub mod persons;
pub mod tasks;
