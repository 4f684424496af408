//! Terminal output helpers shared by the command handlers.

pub mod output;
