//! Deploy packaging for hoist: staged cleanup, ignore filtering, and
//! deterministic zip archiving of a built dist directory.
//!
//! # Packaging pipeline
//!
//! ```text
//! deploy attempt
//!   1. Stage    ── stage() removes the previous attempt's output dir
//!   2. Build    ── external: the host produces the dist tree
//!   3. Archive  ── prepare() compresses dist into <prefix><revision>.zip
//!   4. Upload   ── external: archive + rendered manifest go to storage
//! ```
//!
//! # Determinism
//!
//! Archive entries are stored under `/`-separated paths relative to the
//! dist root and written in lexicographic order, so identical trees with
//! identical ignore rules produce archives with identical entry layout.
//!
//! # Concurrency
//!
//! [`archive::archive`] suspends while the compression runs on a blocking
//! thread; independent requests may run concurrently. Two attempts must
//! not share an output directory — serializing them is the caller's job.

pub mod archive;
pub mod matcher;
pub mod naming;
pub mod pipeline;
pub mod stage;

pub use pipeline::{PreparedArchive, prepare};
