//! Core data models for the Benefits Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod age;
mod dependent;
mod employee;
mod paycheck;

pub use age::age_on;
pub use dependent::{Dependent, Relationship};
pub use employee::Employee;
pub use paycheck::PayCheck;
