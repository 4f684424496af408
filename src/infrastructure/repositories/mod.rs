//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod profile;
mod store;

pub use profile::JsonProfileRepository;
pub use store::JsonStoreRepository;
