//! Infrastructure Layer
//!
//! Embedded assets standing in for the original DSP pipeline.

pub mod spectrograms;
