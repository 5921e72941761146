//! Adapters for the domain ports: the terminal for interactive runs and
//! in-memory doubles for scripted runs and tests.

pub mod console;
pub mod in_memory;
