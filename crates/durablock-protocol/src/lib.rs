//! Shared types and host-facing seams for durablock.
//!
//! The configuration plane never talks to a concrete game server. It resolves
//! block names through a [`BlockRegistry`] and reads bundled defaults through a
//! [`ResourceProvider`], both supplied by the host.

mod block;
mod resource;

pub use block::{BlockRegistry, BlockType, BlockTypeTable, normalize_name};
pub use resource::ResourceProvider;
