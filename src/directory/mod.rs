//! User directory: the external, name-ordered profile store.
//!
//! The application only ever sees one bounded page per query
//! ([`DIRECTORY_PAGE_SIZE`] documents); search refinement happens client-side
//! in the `search` module. [`JsonDirectory`] is the file-backed
//! implementation used by the CLI and tests.

pub mod json_store;
pub mod store;

pub use json_store::{JsonDirectory, default_data_dir};
pub use store::{DIRECTORY_PAGE_SIZE, UserDirectory};
