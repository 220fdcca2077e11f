//! Top-level facade crate for the iris prediction service.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use iris_core::*;
}

pub mod gateway {
    pub use iris_gateway::*;
}
