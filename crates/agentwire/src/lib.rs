//! Top-level facade crate for agentwire.
//!
//! Re-exports the message contract and the frame codec so users can depend on a single crate.

pub mod core {
    pub use agentwire_core::*;
}

pub mod codec {
    pub use agentwire_codec::*;
}
