//! Embedded default dictionary
//!
//! Compiled into the binary at build time from `data/dictionary.txt`.

include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));
