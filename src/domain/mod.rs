//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types
//! - `state.rs` — State containers with update methods (app-owned)
//! - `client.rs` — Sub-client with HTTP methods

pub mod backend;
pub mod view;

pub use backend::ActivationState;
pub use view::state::{Buckets, DataBucket};
pub use view::View;
