//! Wire representation of people and tasks
//!
//! These are the JSON shapes exchanged with HTTP clients. Absent data is
//! modelled with `Option` and omitted from serialized output, never sent
//! as `null`.

pub mod person;
pub mod task;
pub mod timestamp;

pub use person::{Person, PersonDetails};
pub use task::{Task, TaskDetails};
