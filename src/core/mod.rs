// src/core/mod.rs

pub mod doc;
pub mod fields;
pub mod net;
