// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod core;
pub mod error;
pub mod extract;
pub mod params;
pub mod record;
pub mod sink;
pub mod tables;
