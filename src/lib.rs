//! Shift earnings engine
//!
//! This crate computes expected pay for logged work shifts, including a
//! night differential with a configurable break allocation policy, and
//! resolves the closing-day and pay-day billing windows each shift is paid in.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
