//! # AVC Rust Backend
//!
//! Star visibility computation engine.
//!
//! This crate is the Rust backend of the Automated Visibility Catalog (AVC):
//! given an observer location and a calendar date, it computes when one or
//! many stars are above the local horizon while the Sun is below it, sampled
//! at a 5-minute cadence over a 24-hour window anchored at local noon. The
//! backend exposes a REST API via Axum for remote presentation layers.
//!
//! ## Features
//!
//! - **Geodetic Resolution**: Map latitude/longitude to an IANA time zone and
//!   UTC offset via point-in-polygon lookup
//! - **Catalog Loading**: Parse delimited star catalogs (CSV/TSV, delimiter
//!   auto-detected) with column validation and a non-fatal warning channel
//! - **Visibility Computation**: Transform equatorial coordinates to local
//!   altitude across the sampling grid, intersect with the night mask, and
//!   derive per-star visible windows and durations
//! - **Altitude Series**: Full star/Sun altitude curves for charting in the
//!   single-target path
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Shared value objects and the output contracts
//! - [`astro`]: Sidereal time, solar ephemeris, and coordinate transforms
//! - [`catalog`]: Star catalog loading from delimited text
//! - [`models`]: Julian date and the sampling grid
//! - [`services`]: Location resolution, the visibility engine, report
//!   assembly, and the catalog cache
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod astro;
pub mod catalog;
pub mod error;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{Error, Result};
