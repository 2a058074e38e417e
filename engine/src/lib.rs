//! # TLE Rust Engine
//!
//! Timeline layout engine for the project-management board frontend.
//!
//! This crate provides the Rust core behind the board timeline view: pure,
//! synchronous computations that turn block/event/availability data into grid
//! geometry and drag results. The React frontend owns rendering, network
//! calls, and styling; this engine owns the arithmetic.
//!
//! ## Features
//!
//! - **Business-Day Arithmetic**: weekend-skipping date math (offsets, week
//!   snapping) used by every other component
//! - **Grid Layout**: date-span to pixel `{left, width}` conversion for a
//!   horizontal week grid
//! - **Group-Move Resolution**: collision handling when a run of blocks is
//!   dragged by whole weeks, pushing stationary blocks out of the way
//! - **Viewport Computation**: auto-expanding visible date window with
//!   scroll anchoring
//! - **Data Loading**: parse board snapshot JSON as served by the board API
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: DTO types crossing the JSON boundary (ids, move-group payloads)
//! - [`models`]: domain value types and business-day time utilities
//! - [`algorithms`]: order-dependent core algorithms (collision resolution)
//! - [`services`]: layout, viewport, drag, and state orchestration
//! - [`parsing`]: board snapshot ingestion
//! - [`config`]: TOML-backed layout settings
//!
//! ## Execution model
//!
//! Everything here is synchronous and total over well-formed input. A drag
//! computes its complete result before any state mutation is applied; the
//! caller persists the result and refetches on failure.

pub mod api;
pub mod config;
pub mod error;

pub mod algorithms;
pub mod models;
pub mod parsing;
pub mod services;

pub use error::{EngineError, EngineResult};
