// src/lib.rs
#[macro_use]
mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod csv;
pub mod data;
pub mod error;
pub mod filter;
pub mod gui;
pub mod model;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use data::{ Catalog, FilteredView, MenuBoard };
pub use error::LoadError;
pub use filter::{ distinct_values, FilterSet };
