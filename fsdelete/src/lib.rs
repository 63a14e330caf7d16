// fsdelete/src/lib.rs
//! # fsdelete CLI
//!
//! Standalone host for the fileset delete post-action: it reads a deployment
//! file, takes the run outcome and runtime arguments from the command line and
//! reports what was deleted.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
