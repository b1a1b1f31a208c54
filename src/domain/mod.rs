//! Domain Layer
//!
//! Pure classification logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Extracted document metadata and the canon registry
//! - `value_objects/` - Label types (Tradition, Period, Origin, ContributorGroup)
//! - `services/` - Keyword classifier, provenance buckets, folder naming
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
