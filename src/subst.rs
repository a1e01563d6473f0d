//! Substitution: resolving `$name`, `[cmd]`, and `{literal}` forms.
//!
//! [`piece`] resolves a single lexeme span already classified by
//! [`crate::token`] — this is what [`crate::eval`] calls once per
//! `Part`/`Word` fragment while assembling a command's words. [`whole`]
//! instead re-scans an entire, already-assembled string for `$` and `[`
//! forms without touching anything else; it backs the `subst` built-in,
//! whose whole purpose is to run substitution a second time over text
//! that arrived as data (e.g. a variable's value) rather than as source.
//!
//! Variable substitution is resolved by a direct read against
//! [`crate::env::Environment`] rather than by synthesizing a `set NAME`
//! script and re-entering the evaluator, which is how the reference
//! implementation does it — the two are behaviorally equivalent for
//! every form this language supports (`$name`, `$$name`, `$[cmd]`,
//! `${brace name}`), and the direct read avoids manufacturing scripts
//! just to parse them straight back out. See DESIGN.md.

use crate::eval::{Flow, Interpreter};
use crate::token::{self, Token};
use crate::value::Value;
use crate::MAX_VAR_LENGTH;

/// Resolves one already-classified `Part`/`Word` span.
///
/// `span` is the raw, unsubstituted lexeme text as returned by
/// [`token::next_lexeme`]: it may start with `$`, `[`, `{`, or be a
/// plain run of ordinary bytes (or be empty, for the zero-length
/// fragments that mark entering/leaving a quoted string).
pub fn piece(interp: &mut Interpreter, span: &[u8]) -> (Value, Flow) {
    if span.is_empty() {
        return (Value::empty(), Flow::Normal);
    }
    match span[0] {
        b'$' => variable(interp, &span[1..]),
        b'[' => command(interp, &span[1..span.len() - 1]),
        b'{' => (Value::new(&span[1..span.len() - 1]), Flow::Normal),
        _ => (Value::new(span), Flow::Normal),
    }
}

/// Resolves a `$...` reference. `name_span` is whatever followed the
/// `$`: recursively resolving it (rather than treating it as plain
/// text) is what makes `$$name` and `$[cmd]` fall out of the same
/// machinery as plain `$name`, instead of needing their own cases.
///
/// The length limit is checked against `name_span` itself — the raw,
/// pre-substitution remainder — not the resolved name, matching the
/// reference's check against the raw `$...` span before it ever builds
/// or evaluates anything from it.
fn variable(interp: &mut Interpreter, name_span: &[u8]) -> (Value, Flow) {
    if name_span.len() > MAX_VAR_LENGTH {
        interp.set_result(Value::from("variable name too long"));
        return (Value::empty(), Flow::Error);
    }
    let (name, flow) = piece(interp, name_span);
    if flow != Flow::Normal {
        return (name, flow);
    }
    let value = interp.var_or_create(&name).clone();
    (value, Flow::Normal)
}

/// Resolves a `[...]` command substitution: evaluates `content` as a
/// script and yields its result. Any non-`Normal` flow (an error, or a
/// `return`/`break`/`continue` escaping from inside the brackets)
/// propagates straight out to the caller, same as the reference.
fn command(interp: &mut Interpreter, content: &[u8]) -> (Value, Flow) {
    let flow = interp.eval(content);
    (interp.result().clone(), flow)
}

/// Runs substitution across an entire string, treating everything
/// except `$` and `[` as literal — including whitespace, `;`, `\n`,
/// and brace characters, none of which are special outside of normal
/// command parsing. Backs the `subst` built-in.
pub fn whole(interp: &mut Interpreter, content: &[u8]) -> (Value, Flow) {
    let mut out = Vec::with_capacity(content.len());
    let mut i = 0usize;
    while i < content.len() {
        match content[i] {
            b'$' | b'[' => {
                let remaining = token::sentineled(&content[i..]);
                let lex = token::next_lexeme(&remaining, false);
                if lex.token == Token::Error {
                    interp.set_result(Value::from("syntax error"));
                    return (Value::empty(), Flow::Error);
                }
                let span_len = lex.span.len();
                let (value, flow) = piece(interp, lex.span);
                if flow != Flow::Normal {
                    return (value, flow);
                }
                out.extend_from_slice(value.as_bytes());
                i += span_len;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    (Value::new(out), Flow::Normal)
}
