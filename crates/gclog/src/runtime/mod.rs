//! Runtime — process bootstrap and the single-file analysis run.

pub mod boot;
pub mod run;
