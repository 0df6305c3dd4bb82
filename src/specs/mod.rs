// src/specs/mod.rs
//! # Page specs
//!
//! Page-specific extraction for the stats site. Each spec focuses on a
//! single page and encodes *where the ground truth lives in the HTML* and
//! *how to read it tolerantly*.
//!
//! ## What lives here
//! - The positional layout assumptions (which table, which rows, which
//!   cells), expressed through the `core::doc` accessors only.
//! - The field cleanup rules for each page, as `core::fields` specs.
//! - Light shaping into the `model` records.
//!
//! ## What does **not** live here
//! - Fetch scheduling, pacing and skip-on-failure policy (`runner`).
//! - Classification and reporting (`classify`, `report`).
//!
//! ## Conventions & invariants
//! - Specs return `model` records or a `ScrapeError`; they never log, print
//!   or panic on bad pages.
//! - Stable output shapes: `roster` returns players in page order,
//!   `weapons` always returns exactly [`crate::model::WEAPON_SLOTS`] records.
//! - Every spec is testable offline against inline HTML fixtures.
//!
//! In short: **specs know how to read the pages.** Other layers decide when
//! to fetch and what to do with the records.

pub mod profile;
pub mod roster;
pub mod weapons;
