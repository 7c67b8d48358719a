//! Runtime module: process lifecycle: logging and boot.

pub mod boot;
