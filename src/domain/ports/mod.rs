//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod profile_repository;
pub mod store_repository;

pub use profile_repository::{ProfileError, ProfileRepository};
pub use store_repository::{StoreError, StoreRepository};
