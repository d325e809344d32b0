//! Element trees the schema converter can read.
//!
//! [`Page`] parses HTML and computes its styles. [`Snapshot`] loads a tree
//! captured from a live browser together with the resolved styles it had.
//! Both answer the converter's tree, style and selection queries.

#![forbid(unsafe_code)]

mod document;
mod snapshot;

pub use document::Page;
pub use snapshot::{Snapshot, SnapshotNode};
