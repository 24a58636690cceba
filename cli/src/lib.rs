//! Terminal host for the catalog core.
//!
//! # Overview
//! Reads commands from a prompt, turns them into controller actions, executes
//! the resulting requests with a blocking HTTP client and leaves rendering
//! to the caller.
//!
//! # Design
//! - Requests run one at a time, in issue order, on the calling thread.
//! - `Transport` is the only I/O seam, so sessions are testable with canned
//!   responses.

pub mod command;
pub mod session;
pub mod transport;

pub use command::{Command, CommandError, HELP};
pub use session::{Flow, Form, Session};
pub use transport::{Transport, UreqTransport};
