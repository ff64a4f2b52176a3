// Licensed under the MIT license, see the LICENSE file or <http://opensource.org/licenses/MIT>

//! Error types.

/// Errors surfaced by the crate's public API.
///
/// Per the spec, only contract violations (programmer bugs) are reported
/// as `Err`; empty input, unresolved contrast searches, and degenerate
/// splits are not errors (see `SPEC_FULL.md` §7).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `max_colors` must be at least 1.
    #[error("max_colors must be at least 1, got {0}")]
    InvalidMaxColors(u16),
}
