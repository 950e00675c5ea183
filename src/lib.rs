//! Employee Benefits Engine
//!
//! This crate provides the benefits eligibility rules and per-paycheck cost
//! calculation for a payroll benefits service, together with the JSON-backed
//! employee store and the HTTP API that exposes them.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
