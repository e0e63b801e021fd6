//! Host-side helpers: the pieces an application loop wraps around the menu core.

pub mod commands;
pub mod demo;
pub mod stack;

pub use commands::Command;
pub use stack::{MenuStack, StackUpdate};
