//! Meeting-link directories and per-event link resolution.

mod directory;
mod resolve;

pub use directory::{LinkDirectory, LinkEntry, merge_directories};
pub use resolve::{MatchStrategy, ResolvedLinks, resolve_links};
