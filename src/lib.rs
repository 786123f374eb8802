//! Salary Estimator for tech roles in Germany, Austria and Switzerland
//!
//! This crate estimates a salary band and a contractor day rate from a role,
//! location, experience, company size and remote share, using reference
//! tables loaded from YAML. It also renders the estimate as summary text or a
//! print document and copies summaries to the system clipboard.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
