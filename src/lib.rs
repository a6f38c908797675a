//! Fixed-width binary export of tagged-union records.
//!
//! A data file is a flat run of equally sized records with no header, magic or
//! count: writer and reader agree on the [`Layout`](record::Layout) and on how
//! many records to expect.

pub mod config;
pub mod data;
pub mod env;
pub mod generator;
pub mod read_out;
pub mod record;
mod util;

pub use util::{Error, Random, Result};
