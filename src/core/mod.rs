//! Core types shared across armgraph.
//!
//! - [`ArmGraphError`], [`ErrorContext`] and [`user_friendly_error`] for error reporting
//! - [`NodeIdentity`], the canonical key of every graph node

pub mod error;
pub mod identity;

pub use error::{ArmGraphError, ErrorContext, user_friendly_error};
pub use identity::NodeIdentity;
