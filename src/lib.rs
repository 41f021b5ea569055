#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod bounding_box;
pub mod catmull_rom;
pub mod spline;

pub use crate::bounding_box::BoundingBox;
pub use crate::catmull_rom::CatmullRomSegment;
pub use crate::spline::{polyline_length, sample_spline, DEFAULT_SAMPLES_PER_SPAN};
