// src/core.rs
pub mod comparator;
pub mod copier;
pub mod files;
pub mod git;
pub mod header;
pub mod ignore;
pub mod paths;
pub mod pattern;
pub mod sync;
