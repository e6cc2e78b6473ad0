//! Public content: page props built from the document store

pub mod loader;
pub mod props;

pub use loader::ContentLoader;
pub use props::*;
