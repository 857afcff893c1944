//! Embedded word lists
//!
//! `ANSWERS` (solutions pool) and `ALLOWED` (accepted dictionary) are
//! generated by `build.rs` from the files under `data/`.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
