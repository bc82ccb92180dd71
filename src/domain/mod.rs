//! Domain Layer
//!
//! The reconciliation core of Revship - decision logic without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Diff between two revisions
//! - `value_objects/` - Immutable value types (Revision, ExcludeFilter, AdditionalFile)
//! - `services/` - Deployment plans (Incremental, Full)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
