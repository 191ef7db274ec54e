//! End-to-end console tests.
//!
//! Drive the full console loop with in-memory input and output, a scripted
//! random source and a fixed clock, so every game is reproducible.

mod e2e_helpers;
mod gameplay_flow_tests;
mod json_output_tests;
