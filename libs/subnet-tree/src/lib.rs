#![doc = include_str!("../README.md")]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod aggregate;
mod allocator;
pub mod block;
mod distribution;
mod error;
mod request;
mod tree;

pub use aggregate::allocate_many;
pub use allocator::{allocate, allocate_tree};
pub use distribution::{Distribution, Recipient};
pub use error::{Error, Result};
pub use request::AllocationRequest;
pub use tree::SubdivisionTree;
