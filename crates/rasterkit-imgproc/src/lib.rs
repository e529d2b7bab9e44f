#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// grayscale conversions module.
pub mod color;

/// image cropping module.
pub mod crop;

/// difference map module.
pub mod diff;

/// image filtering module.
pub mod filter;

/// image flipping module.
pub mod flip;

/// utilities for interpolation.
pub mod interpolation;

/// module containing parallelization utilities.
pub mod parallel;

/// utility functions for resizing images.
pub mod resize;
