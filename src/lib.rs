// lib.rs - Library root for the atto editor

pub mod buffer;
pub mod cli;
pub mod command;
pub mod command_line;
pub mod config;
pub mod cursor;
pub mod editor;
pub mod input;
pub mod keymap;
pub mod mode;
pub mod snapshot;
pub mod ui;
pub mod viewport;
