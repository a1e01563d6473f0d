//! End-to-end scripts exercising the full pipeline: tokenizer,
//! substitutor, environment, and built-in commands together.

use tinytcl::{Flow, Interpreter};

fn run(script: &str) -> (Flow, String) {
    let mut interp = Interpreter::new();
    let flow = interp.eval(script.as_bytes());
    let result = interp.result().as_str().unwrap_or("<non-utf8>").to_string();
    (flow, result)
}

#[test]
fn plain_subst_returns_the_literal_text() {
    let (flow, result) = run("subst hello");
    assert_eq!(flow, Flow::Normal);
    assert_eq!(result, "hello");
}

#[test]
fn adjacent_substitutions_concatenate_without_a_separator() {
    // The empty `[]` command substitution must resolve to an empty
    // value rather than leaving a stale result behind.
    let (flow, result) = run("set foo bar; subst $foo[]$foo");
    assert_eq!(flow, Flow::Normal);
    assert_eq!(result, "barbar");
}

#[test]
fn double_dollar_is_indirect_variable_lookup() {
    let (flow, result) = run("set foo bar; set bar Hello; subst $$foo");
    assert_eq!(flow, Flow::Normal);
    assert_eq!(result, "Hello");
}

#[test]
fn command_substitution_can_itself_contain_subst() {
    let (flow, result) = run("subst hello[subst world]");
    assert_eq!(flow, Flow::Normal);
    assert_eq!(result, "helloworld");
}

#[test]
fn braced_variable_name_can_contain_special_characters() {
    let (flow, result) = run(r#"set {a "b"} hello; subst ${a "b"}"#);
    assert_eq!(flow, Flow::Normal);
    assert_eq!(result, "hello");
}

#[test]
fn braces_preserve_literal_bytes_including_escapes() {
    let (flow, result) = run(r#"set x {\n\thello\n}; set x"#);
    assert_eq!(flow, Flow::Normal);
    assert_eq!(result, r"\n\thello\n");
}

#[test]
fn nested_brackets_are_evaluated_inside_out() {
    let (flow, result) = run("set x [+ 1 [+ 2 3]]");
    assert_eq!(flow, Flow::Normal);
    assert_eq!(result, "6");
}

#[test]
fn quoted_words_allow_embedded_spaces_and_substitution() {
    let (flow, result) = run(r#"set name world; set greeting "hello $name""#);
    assert_eq!(flow, Flow::Normal);
    assert_eq!(result, "hello world");
}

#[test]
fn semicolons_and_newlines_both_separate_commands() {
    let (flow, result) = run("set a 1\nset b 2; set c [+ $a $b]");
    assert_eq!(flow, Flow::Normal);
    assert_eq!(result, "3");
}

#[test]
fn while_loop_with_continue_skips_even_numbers() {
    let script = r#"
        set i 0
        set sum 0
        while {< $i 5} {
            set i [+ $i 1]
            if {== [- [* [/ $i 2] 2] $i] 0} {continue}
            set sum [+ $sum $i]
        }
        set sum
    "#;
    let (flow, result) = run(script);
    assert_eq!(flow, Flow::Normal);
    // odd numbers from 1..=5: 1 + 3 + 5 = 9
    assert_eq!(result, "9");
}

#[test]
fn user_procs_compose() {
    let script = r#"
        proc square {n} { return [* $n $n] }
        proc sum_of_squares {a b} { return [+ [square $a] [square $b]] }
        sum_of_squares 3 4
    "#;
    let (flow, result) = run(script);
    assert_eq!(flow, Flow::Normal);
    assert_eq!(result, "25");
}

#[test]
fn recursive_proc_computes_factorial() {
    let script = r#"
        proc fact {n} {
            if {<= $n 1} {
                return 1
            }
            return [* $n [fact [- $n 1]]]
        }
        fact 5
    "#;
    let (flow, result) = run(script);
    assert_eq!(flow, Flow::Normal);
    assert_eq!(result, "120");
}

#[test]
fn procs_cannot_see_the_caller_scope() {
    let script = r#"
        set secret 42
        proc peek {} { set secret }
        peek
    "#;
    let mut interp = Interpreter::new();
    let flow = interp.eval(script.as_bytes());
    // `secret` isn't visible inside `peek`'s body: it auto-vivifies as a
    // fresh empty variable in `peek`'s own scope rather than seeing the
    // caller's value.
    assert_eq!(flow, Flow::Normal);
    assert_eq!(interp.result().as_str().unwrap(), "");
}

#[test]
fn unterminated_brace_is_a_syntax_error() {
    let (flow, _) = run("set x {unterminated");
    assert_eq!(flow, Flow::Error);
}

#[test]
fn dividing_by_zero_is_an_error_not_a_panic() {
    let (flow, _) = run("/ 1 0");
    assert_eq!(flow, Flow::Error);
}

#[test]
fn calling_an_unknown_command_is_an_error() {
    let (flow, _) = run("does-not-exist 1 2 3");
    assert_eq!(flow, Flow::Error);
}

#[test]
fn host_can_register_its_own_command() {
    use tinytcl::Value;

    fn shout(interp: &mut Interpreter, args: &[Value]) -> Flow {
        let mut text = args[1].as_str().unwrap_or_default().to_uppercase();
        text.push('!');
        interp.set_result(Value::from(text));
        Flow::Normal
    }

    let mut interp = Interpreter::new();
    interp.register("shout", 2, shout);
    let flow = interp.eval(b"shout hello");
    assert_eq!(flow, Flow::Normal);
    assert_eq!(interp.result().as_str().unwrap(), "HELLO!");
}
