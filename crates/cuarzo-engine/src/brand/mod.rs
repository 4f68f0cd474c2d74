//! Brand presentation.
//!
//! Plays an optional caller splash (image or video), then the engine logo,
//! then reports completion so the engine can fire the ready signal:
//!
//! custom media → engine logo (background cleared) → finished
//!
//! Each step is a [`MediaTask`](crate::host::MediaTask); pending steps are
//! resumed by [`BrandSequence::complete`].

mod sequence;

pub use sequence::{BrandMedia, BrandSequence, BrandStage, BrandStep};
