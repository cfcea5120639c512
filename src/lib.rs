//! Real-time 3D skeletal visualization of detected hand landmarks.
//!
//! An external hand-pose model supplies, per detection cycle, zero or more
//! hands of 21 3D points each (image pixel x/y, relative depth z). This crate
//! mirrors and scales those points into scene coordinates, keeps a grow-only
//! pool of per-hand visuals (21 joint spheres + 20 bone cylinders) and orients
//! every bone segment between its two joints.
//!
//! With the `visualize` feature enabled the whole pipeline can be driven as a
//! bevy app; the geometric core has no renderer dependency.

pub mod frame;
pub mod orient;
pub mod pool;
pub mod projection;
pub mod source;
pub mod synthetic;
pub mod types;

#[cfg(feature = "visualize")]
pub mod visualize;
