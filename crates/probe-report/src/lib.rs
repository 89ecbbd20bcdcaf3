//! Report parsing and status classification for the iDRAC sensor probe.
//!
//! This crate is the probe's core: [`parser::parse_report`] turns the
//! loosely tabular `racadm getsensorinfo` text into a structured
//! [`probe_core::inventory::SensorInventory`], and [`classifier::classify`]
//! reduces that inventory to a single Nagios verdict string.

pub mod classifier;
pub mod parser;

pub use probe_core as core;
