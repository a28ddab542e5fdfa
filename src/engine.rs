//! Deck parsing pipeline.
//!
//! Parsing a schedule deck is a single forward pass of pure stages, each
//! consuming the previous stage's output:
//!
//! ```text
//! raw text ── classify_lines ─── keep recognized keyword blocks  (classify.rs)
//!                  │
//!                  v
//!             partition ───────── sticky date cursor, kind tagging (partition.rs)
//!                  │                (Simple / LocalGrid, raw substrings)
//!                  v
//!          normalize_tokens ───── N* expansion + type coercion    (tokenize.rs)
//!                  │
//!                  v
//!            build_record ─────── default substitution, reorder   (build.rs)
//!                  │
//!                  v
//!          Schedule ── find_completion / normalize_query_arguments (query.rs)
//! ```
//!
//! No stage holds state across calls and no stage mutates an earlier stage's
//! output; per-line failures surface as `Issue`s on the final `Schedule`
//! rather than aborting the pass. The public wiring lives in `src/api.rs`.
//!
//! Set `WELLDECK_DEBUG_PARSE=1` to print date-cursor transitions while
//! partitioning.

#[path = "engine/build.rs"]
mod build;
#[path = "engine/classify.rs"]
mod classify;
#[path = "engine/partition.rs"]
mod partition;
#[path = "engine/query.rs"]
mod query;
#[path = "engine/tokenize.rs"]
mod tokenize;

pub(crate) use build::build_record;
pub(crate) use classify::classify_lines;
pub(crate) use partition::partition;
pub(crate) use query::{find_completion, normalize_query_arguments};
pub(crate) use tokenize::normalize_tokens;
