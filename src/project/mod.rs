//! Project access layer.
//!
//! Owns every interaction with the extension project on disk and with the
//! external runtime:
//! - Layout: the fixed file set the validator inspects
//! - Manifest: reading and deserializing `package.json`
//! - Node: invoking the syntax-only `node --check` on a script
//!
//! Check modules never touch the filesystem or spawn processes directly;
//! they go through this layer so the failure modes stay in one place.

pub mod layout;
pub mod manifest;
pub mod node;
