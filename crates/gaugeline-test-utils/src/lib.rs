//! Test utilities for Gaugeline.
//!
//! The main component is `MockDrawContext` (requires the `mock` feature), a
//! [`DrawContext`](gaugeline_core::DrawContext) that records every command
//! instead of drawing, so renderer tests can assert on the exact sequence of
//! paths, paints and strokes.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use gaugeline_core::DrawContext;
//! use gaugeline_core::math::DVec2;
//! use gaugeline_test_utils::{DrawCall, MockDrawContext};
//!
//! let mut mock = MockDrawContext::new();
//! mock.begin_path();
//! mock.arc(DVec2::ZERO, 10.0, 0.0, 1.0, false);
//! mock.stroke();
//!
//! assert_eq!(mock.count_strokes(), 1);
//! assert!(matches!(mock.calls()[0], DrawCall::BeginPath));
//! # }
//! ```

#[cfg(feature = "mock")]
pub mod mock_draw;

#[cfg(feature = "mock")]
pub use mock_draw::*;
