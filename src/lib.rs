//! Embeddable interpreter for a small Tcl-like command language.
//!
//! The crate is built around three tightly coupled pieces: [`token`], a
//! stream tokenizer that classifies one lexeme at a time out of a byte
//! range; [`subst`], a recursive substitution engine built on top of it;
//! and [`eval`], which drives the tokenizer, assembles words, and
//! dispatches on the first word of each command to a registered
//! [`command::Command`]. Everything else — variable scoping
//! ([`env`]), the list surface syntax ([`list`]), and the built-in
//! commands ([`builtins`]) — exists to support that pipeline.
//!
//! A host program embeds the interpreter by constructing an
//! [`Interpreter`], optionally registering its own commands with
//! [`Interpreter::register`], and calling [`Interpreter::eval`] on each
//! script it wants to run.

pub mod builtins;
pub mod command;
pub mod env;
pub mod error;
pub mod eval;
pub mod list;
pub mod subst;
pub mod token;
pub mod value;

pub use command::{Command, CommandFn};
pub use error::ValueError;
pub use eval::{Flow, Interpreter};
pub use list::List;
pub use value::Value;

/// Maximum byte length of a `$name` reference, matching `MAX_VAR_LENGTH`
/// in the reference implementation.
pub const MAX_VAR_LENGTH: usize = 256;
