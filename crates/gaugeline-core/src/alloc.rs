//! Hash collections used across Gaugeline.

pub use ahash::AHashMap as HashMap;
