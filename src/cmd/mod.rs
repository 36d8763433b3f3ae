//! Command handlers for the numval CLI

pub mod check;
