//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Reads graphs with named vertices from JSON and writes the MST
// results back as JSON and CSV
//--------------------------------------------------------------------

extern crate mst_core;
extern crate serde;

#[cfg(test)]
#[macro_use]
extern crate approx;

mod error;
mod input;
mod output;
mod csv_export;

pub use error::{Error, Result};
pub use input::*;
pub use output::*;
pub use csv_export::*;
