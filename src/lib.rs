//! Screw-sort puzzle core.
//!
//! The rules and state machine of a bolt/screw color-sort puzzle: capacity-5
//! stacks of colored screws, batch moves of same-color runs, swap on color
//! mismatch, completion locking, win detection, and a bounded undo history.
//! This crate is a library driven by a host application; rendering, input
//! devices, audio, and save storage live outside and talk to the core
//! through [`core::MoveEngine`], [`input::ClickQueue`], and
//! [`types::Presenter`].

pub mod core;
pub mod input;
pub mod types;
