//! tagmatch - Lifestyle tag compatibility reports
//!
//! A command-line tool that scores how well two people's lifestyle tag
//! selections overlap, with graded partial credit for related-but-different
//! tags, plus solo wellness scoring.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TagmatchError;
