//! Physics systems, leaves first: kinematics integrates one body, the wall
//! resolver clips it against static geometry, the collision pair
//! detect/resolve handles dynamics and fields, and the stability guard
//! keeps runaway state in check.

pub mod collision;
pub mod kinematics;
pub mod stability;
pub mod walls;
