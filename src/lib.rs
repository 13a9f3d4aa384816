//! iterm2gnome library - Convert iTerm2 color themes into GNOME Terminal profiles.
//!
//! This library exposes the conversion pipeline of the `iterm2gnome` CLI
//! for use in tests and potentially other applications.
//!
//! # Modules
//!
//! - `plist`: Property-list XML document model
//! - `theme`: Theme parsing and color conversion
//! - `profile`: Profile resolution against the store listing
//! - `dconf`: dconf key layout and write operation building
//! - `store`: External store seams (real dconf, simulate mode, mocks)
//! - `pipeline`: End-to-end glue
//! - `error`: Error types with user-recoverable hints
#![forbid(unsafe_code)]

pub mod cli;
pub mod dconf;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod plist;
pub mod profile;
pub mod store;
pub mod theme;
