//! Site adapter implementations.
//!
//! This crate ships a single adapter, [`ManhuaFastSource`], covering the
//! manhuafast.net mirror of the Madara WordPress theme. The module split
//! keeps room for sibling mirrors that share the same markup family.

pub mod manhuafast;

pub use manhuafast::ManhuaFastSource;
