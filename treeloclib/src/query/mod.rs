//! Query processing: rank scan results.
//!
//! This module handles the third stage of the pipeline - turning the flat
//! list of per-file records into leaderboards.
//!
//! ## Example
//!
//! ```rust,ignore
//! use treeloclib::query::{Leaderboards, DEFAULT_TOP};
//!
//! let boards = Leaderboards::from_result(&result, DEFAULT_TOP);
//! for file in &boards.files.entries {
//!     println!("{} {}", file.lines, file.path);
//! }
//! ```

pub mod leaderboard;

pub use leaderboard::{rank_extensions, rank_files, Leaderboard, Leaderboards, DEFAULT_TOP};
