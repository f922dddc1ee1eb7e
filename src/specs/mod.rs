// src/specs/mod.rs
//! # Page "specs"
//!
//! Knowledge of the upstream listing markup: which tag/class combinations mark an
//! event, its anchor, its date/time/venue/session-type lines, the ticketing widgets,
//! and the day headings. Every selector the pipeline keys on is declared here.
//!
//! ## What lives here
//! - **Selectors and literal markers** (`productItem`, `Venue:`, `product-id`, …).
//! - **Positional assumptions** (the venue line is the third `div` in the details block).
//!
//! ## What does **not** live here
//! - **Tree walking or mutation** – that is `pipeline::*`.
//! - **Transport** – `core::net` and `acquire`.
//!
//! When the upstream site changes its markup, this is the first file to touch; the
//! pipeline's fail-fast checks point at which assumption broke.
pub mod programme;
