//! The evaluator: drives the tokenizer, assembles words, and dispatches
//! commands.
//!
//! Every result of evaluating something — a whole script, a single
//! command, a nested `[...]` substitution — is reported as a [`Flow`]
//! code plus whatever value [`Interpreter::result`] holds at the time,
//! rather than as a `Result<Value, SomeError>`. This mirrors the
//! reference interpreter's single return code threaded through every
//! level of recursion: `return`, `break`, and `continue` are not
//! exceptions bolted on top of the error path, they are the *same*
//! mechanism error propagation uses, just with different codes. A
//! `Result`-based design would need a parallel unwinding mechanism for
//! loop control that the reference doesn't have, so this crate keeps
//! the one mechanism instead of introducing two.

use tracing::{instrument, trace};

use crate::builtins;
use crate::command::{self, Command, CommandFn, CommandImpl};
use crate::env::Environment;
use crate::list::List;
use crate::subst;
use crate::token::{self, Token};
use crate::value::Value;

/// The result of evaluating a script, command, or substitution.
///
/// `Normal` and `Error` are what a host checks after calling
/// [`Interpreter::eval`]; `Return`, `Break`, and `Again` only ever
/// escape as far as the nearest `proc`/`while` body that knows what to
/// do with them — see [`crate::builtins::control`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Normal,
    Error,
    Return,
    Break,
    /// Requests the next loop iteration (Tcl's `continue`).
    Again,
}

enum DispatchAction {
    Native(CommandFn),
    Proc(Value, Value),
}

/// An embeddable interpreter instance.
///
/// Construct one with [`Interpreter::new`], optionally register host
/// commands with [`Interpreter::register`], then call [`Interpreter::eval`]
/// once per script. State (variables, user-defined `proc`s) persists
/// across calls on the same instance.
pub struct Interpreter {
    env: Environment,
    commands: Vec<Command>,
    result: Value,
}

impl Interpreter {
    /// Builds an interpreter with the standard built-ins registered; see
    /// [`crate::builtins`] for which ones are gated behind Cargo features.
    pub fn new() -> Self {
        let mut interp = Interpreter {
            env: Environment::new(),
            commands: Vec::new(),
            result: Value::empty(),
        };
        builtins::register_all(&mut interp);
        interp
    }

    /// Registers a host-provided native command, shadowing any existing
    /// command of the same name. `arity` is the required word count
    /// including the command name, or `0` to accept any count.
    pub fn register(&mut self, name: impl Into<Value>, arity: usize, func: CommandFn) {
        self.commands.push(Command::native(name, arity, func));
    }

    /// Registers a user-defined procedure. Used by the `proc` built-in;
    /// exposed for hosts that want to install a procedure without
    /// running a `proc` script through [`Interpreter::eval`].
    pub fn define_proc(&mut self, name: Value, params: Value, body: Value) {
        self.commands.push(Command::proc(name, params, body));
    }

    /// The result of the most recently completed evaluation.
    pub fn result(&self) -> &Value {
        &self.result
    }

    pub fn set_result(&mut self, value: Value) {
        self.result = value;
    }

    /// Reads a variable in the current scope.
    pub fn var(&self, name: &Value) -> Option<&Value> {
        self.env.get(name)
    }

    /// Reads a variable in the current scope, auto-vivifying it as an
    /// empty value if it is not already set.
    pub fn var_or_create(&mut self, name: &Value) -> &Value {
        self.env.get_or_create(name)
    }

    /// Sets a variable in the current scope, creating it if absent.
    pub fn set_var(&mut self, name: Value, value: Value) {
        self.env.set(name, value);
    }

    pub(crate) fn push_scope(&mut self) {
        self.env.push();
    }

    pub(crate) fn pop_scope(&mut self) {
        self.env.pop();
    }

    /// Evaluates `script`, returning the terminating [`Flow`]. The
    /// result value, if any, is available from [`Interpreter::result`].
    ///
    /// `script` need not end with a command terminator. Internally a
    /// NUL sentinel is appended before tokenizing; see [`crate::token`]
    /// for why every re-entry into the tokenizer needs one.
    #[instrument(level = "trace", skip(self, script))]
    pub fn eval(&mut self, script: &[u8]) -> Flow {
        let buf = token::sentineled(script);
        let mut rest: &[u8] = &buf;
        let mut quoted = false;
        let mut words: Vec<Value> = Vec::new();
        let mut current: Option<Value> = None;

        loop {
            let lex = token::next_lexeme(rest, quoted);
            match lex.token {
                Token::Error => {
                    trace!("syntax error");
                    self.result = Value::from("syntax error");
                    return Flow::Error;
                }
                Token::Part => {
                    let (value, flow) = subst::piece(self, lex.span);
                    if flow != Flow::Normal {
                        return flow;
                    }
                    current = Some(current.take().unwrap_or_else(Value::empty).append(value));
                    rest = lex.rest;
                    quoted = lex.quoted;
                }
                Token::Word => {
                    let (value, flow) = subst::piece(self, lex.span);
                    if flow != Flow::Normal {
                        return flow;
                    }
                    let word = current.take().unwrap_or_else(Value::empty).append(value);
                    words.push(word);
                    rest = lex.rest;
                    quoted = lex.quoted;
                }
                Token::Cmd => {
                    rest = lex.rest;
                    quoted = lex.quoted;
                    if !words.is_empty() {
                        let flow = self.dispatch(&words);
                        words.clear();
                        if flow != Flow::Normal {
                            return flow;
                        }
                    } else {
                        self.result = Value::empty();
                    }
                    if rest.is_empty() {
                        break;
                    }
                }
            }
        }
        Flow::Normal
    }

    fn dispatch(&mut self, words: &[Value]) -> Flow {
        let name = words[0].as_bytes().to_vec();
        let action = match command::find(&self.commands, &name, words.len()) {
            Some(cmd) => match &cmd.imp {
                CommandImpl::Native(f) => DispatchAction::Native(*f),
                CommandImpl::Proc { params, body } => {
                    DispatchAction::Proc(params.clone(), body.clone())
                }
            },
            None => {
                self.result = Value::new(format!(
                    "invalid command name \"{}\"",
                    words[0].as_str().unwrap_or("<binary>")
                ));
                return Flow::Error;
            }
        };
        trace!(name = ?words[0], argc = words.len(), "dispatch");
        match action {
            DispatchAction::Native(f) => f(self, words),
            DispatchAction::Proc(params, body) => self.invoke_proc(&params, &body, words),
        }
    }

    fn invoke_proc(&mut self, params: &Value, body: &Value, args: &[Value]) -> Flow {
        let param_list = List::new(params.clone());
        let nparams = param_list.len();
        if args.len() != nparams + 1 {
            self.result = Value::from("wrong # args");
            return Flow::Error;
        }
        self.push_scope();
        for i in 0..nparams {
            let pname = param_list.at(i).expect("index within bounds");
            self.env.set(pname, args[i + 1].clone());
        }
        let flow = self.eval(body.as_bytes());
        self.pop_scope();
        match flow {
            Flow::Return => Flow::Normal,
            Flow::Break | Flow::Again => {
                self.result = Value::from("invoked break/continue outside of a loop");
                Flow::Error
            }
            other => other,
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
