//! File System Helpers

mod atomic;

pub use atomic::write_atomic;
