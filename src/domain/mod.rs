//! Domain Layer
//!
//! This is the core of GymLog - pure workout logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Workout, Exercise, Set, WorkoutCollection, Profile
//! - `value_objects/` - FieldValue, identifiers, calendar dates
//! - `services/` - Normalizer, stats, grouping, PR extraction, dashboard, search
//! - `ports/` - Repository interfaces implemented by infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system
//! 2. **Pure Functions** - Services take a snapshot and return derived data
//! 3. **Ports & Adapters** - Persistence goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
