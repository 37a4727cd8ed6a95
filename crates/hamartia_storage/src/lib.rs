//! Character record stores.
//!
//! Two [`RecordStore`](hamartia_interface::RecordStore) backends:
//! - [`InMemoryRecordStore`] keeps records in a process-local map
//! - [`FileSystemRecordStore`] keeps one JSON document per record on disk
//!
//! Both key records by character name and treat a missing key on `get` as
//! `None`, not an error.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod memory;

pub use filesystem::FileSystemRecordStore;
pub use memory::InMemoryRecordStore;
