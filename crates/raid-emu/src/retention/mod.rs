//! Retention layer primitives: block stores and the arrays built on them.

pub mod array;
pub mod disk;
