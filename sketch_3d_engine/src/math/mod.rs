//! Transform math: pure functions shared by the camera and the shape builders.
//!
//! Angles are expressed in degrees at this boundary; conversion to radians
//! happens inside each function.

mod transform;

pub use transform::{
    look_at, perspective,
    direction_from_angles, angles_from_direction, orbit_offset,
    rotate_about_axis,
};
