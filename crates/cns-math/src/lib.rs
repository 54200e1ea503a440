#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # CNS Math
//!
//! This crate provides two immutable value types for basic geometric computation:
//!
//! - [`Vector3D`]: a 3-component double precision vector.
//! - [`Matrix3D`]: a 3x3 double precision matrix stored as three column vectors.
//!
//! All operations return new values. The only failure is a scalar division by
//! exactly zero, reported as [`MathError::DivideByZero`].
//!
//! ## Example
//!
//! ```rust
//! use cns_math::{magnitude, Matrix3D, Vector3D};
//!
//! let a = Vector3D::new(1.0, 2.0, 3.0);
//! let b = Vector3D::new(-3.0, 2.0, -1.0);
//! assert_eq!(magnitude(&(a - b)), 32.0_f64.sqrt());
//!
//! let m = Matrix3D::new(a, b, Vector3D::Z);
//! assert_eq!(m * Vector3D::X, a);
//!
//! assert!((a / 0.0).is_err());
//! ```

/// Error types for the arithmetic operations.
pub mod error;

/// 3x3 matrix stored in column-major order.
pub mod matrix;

/// 3D vector.
pub mod vector;

pub use error::MathError;
pub use matrix::{transpose, Matrix3D};
pub use vector::{dot, magnitude, normalize, Vector3D};
