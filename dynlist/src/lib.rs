//! # dynlist
//!
//! This crate provides a generic growable array list backed by a single contiguous block of
//! storage that doubles on overflow.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

pub mod collection;
pub mod doc_tests;
mod error;
pub mod list;
mod utils;

/// Shortcut of core::result::Result<T, dynlist::Error>;
pub type Result<T> = core::result::Result<T, Error>;

pub use error::*;
