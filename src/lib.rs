//! Generate and check seeded daily puzzles: KenKen and SET

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

#[macro_use]
extern crate log;

#[allow(missing_docs)]
pub mod collections;
pub mod error;
pub mod generated;
pub mod kenken;
pub mod random;
pub mod set;

pub use crate::generated::Generated;
pub use crate::random::{Mulberry32, Seed};
