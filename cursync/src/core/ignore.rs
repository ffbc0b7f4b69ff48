// src/core/ignore.rs
//! Gitignore-style exclusion list read from the rules directory.

mod loader;
mod patterns;

pub use crate::core::ignore::loader::{IGNORE_FILE_NAME, load_ignore_list};
pub use crate::core::ignore::patterns::IgnoreList;
