//! Shared, platform-independent core of the financial reports panel.
//!
//! The browser crate only wires these pieces to `gloo-net`, timers and the DOM;
//! every decision about what to fetch, when to refresh and what to show lives here.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod requests;
pub mod workflow;
