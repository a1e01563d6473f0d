//! `proc`.

use crate::eval::{Flow, Interpreter};
use crate::value::Value;

/// `proc name params body` — defines a new command. `params` is a list
/// of parameter names; calling the command binds each to the
/// corresponding argument in a fresh, flat scope (see [`crate::env`])
/// and evaluates `body` there.
pub fn cmd_proc(interp: &mut Interpreter, args: &[Value]) -> Flow {
    interp.define_proc(args[1].clone(), args[2].clone(), args[3].clone());
    interp.set_result(Value::empty());
    Flow::Normal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defined_proc_is_callable() {
        let mut interp = Interpreter::new();
        assert_eq!(interp.eval(b"proc greet {name} {return \"hi $name\"}"), Flow::Normal);
        assert_eq!(interp.eval(b"greet world"), Flow::Normal);
        assert_eq!(interp.result(), &Value::from("hi world"));
    }

    #[test]
    fn calling_with_wrong_arg_count_errors() {
        let mut interp = Interpreter::new();
        assert_eq!(interp.eval(b"proc greet {name} {return $name}"), Flow::Normal);
        assert_eq!(interp.eval(b"greet a b"), Flow::Error);
    }
}
