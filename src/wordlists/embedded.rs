//! Embedded pair list
//!
//! Pair list compiled into the binary at build time.

// Include generated pair list from build script
include!(concat!(env!("OUT_DIR"), "/pairs.rs"));
