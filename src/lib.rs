//! notifyourself: send a notification to your phone from the command line.
//!
//! A library for validating a notification request against a local INI
//! configuration and posting it to the notifyourself service.

pub mod config;
pub mod notify;
pub mod validate;
