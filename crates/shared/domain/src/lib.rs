//! # Domain Models
//!
//! Pure types shared by the registration slice, the store client and the desktop shell.
//! Dependencies stay at `serde` and `strum`: no I/O, networking, or heavy logic here.

pub mod config;
pub mod constants;
pub mod submission;
