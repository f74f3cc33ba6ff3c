//! Domain layer: digit inputs and the Luhn arithmetic over them.
//!
//! Everything in here is a pure function of its arguments. Nothing is cached
//! and no reference to caller data outlives a call, so every operation may be
//! invoked concurrently from any number of threads.

pub mod digits;
pub mod luhn;
