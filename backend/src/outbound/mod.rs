//! Outbound adapters implementing the domain ports.
//!
//! - **memory**: the bundled season held in process
//! - **persistence**: PostgreSQL repositories using Diesel

pub mod memory;
pub mod persistence;
