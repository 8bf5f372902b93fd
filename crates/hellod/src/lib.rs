//! Top-level facade crate for hellod.
//!
//! Re-exports the core route table and the server library so users can depend on a single crate.

pub mod core {
    pub use hellod_core::*;
}

pub mod server {
    pub use hellod_server::*;
}
