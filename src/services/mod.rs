//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that sits between the catalog and
//! astronomy primitives and the outer API surfaces. Services orchestrate
//! location resolution, visibility computation and report assembly.

pub mod cache;

pub mod geodetic;

pub mod report;

pub mod visibility;

pub use cache::{calculate_checksum, CatalogCache};
pub use geodetic::{resolve, resolve_str, ResolvedLocation};
pub use report::{apply_filters, assemble_rows, FilterOptions};
pub use visibility::{compute_batch, compute_single, NightContext};
