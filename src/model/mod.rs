//! Distance/city model.
//!
//! An [`Instance`] is an ordered list of [`City`] values, each owning its
//! row of the n×n distance table. Instances are built once, either from 2D
//! points under a [`Metric`] or from a raw distance matrix, and are
//! read-only afterwards: every solver borrows the same instance.

mod city;
mod instance;
mod point;

pub use city::City;
pub use instance::Instance;
pub use point::{Metric, Point};
