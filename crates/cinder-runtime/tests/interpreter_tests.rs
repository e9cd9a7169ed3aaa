//! Interpreter integration tests

mod common;

use cinder_runtime::{format_number, EvalError, Span};
use common::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn test_left_associativity() {
    let vars = [("a", 10.0), ("b", 3.0), ("c", 2.0)];
    assert_eq!(eval_expr("a - b - c", &vars).unwrap(), 5.0);
    assert_eq!(eval_expr("a - b + c", &vars).unwrap(), 9.0);
    assert_eq!(eval_expr("a / b * c", &vars).unwrap(), 10.0 / 3.0 * 2.0);
}

#[rstest]
#[case("2 + 3 * 4", 14.0)]
#[case("(2 + 3) * 4", 20.0)]
#[case("-2 * 3", -6.0)]
#[case("- (2 * 3)", -6.0)]
#[case("2 - -3", 5.0)]
#[case("- - 4", 4.0)]
#[case("100 / 10 / 5", 2.0)]
#[case("1 - 2 - 3 - 4", -8.0)]
#[case("2 * 3 - 4 * 5", -14.0)]
#[case("7.5 / 2.5", 3.0)]
#[case("3. * 2", 6.0)]
fn test_arithmetic(#[case] source: &str, #[case] expected: f64) {
    assert_eq!(eval_expr(source, &[]).unwrap(), expected);
}

#[test]
fn test_unary_minus_binds_tighter_than_subtraction() {
    let vars = [("a", 2.0), ("b", 3.0)];
    // (-a) - b, never -(a - b)
    assert_eq!(eval_expr("-a - b", &vars).unwrap(), -5.0);
    assert_eq!(eval_expr("b - -a * b", &vars).unwrap(), 9.0);
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn test_block_value_and_bindings() {
    let run = run("begin x=1; y=2; end");
    assert_eq!(run.result.as_ref().copied().unwrap(), 2.0);
    assert_eq!(run.var("x"), 1.0);
    assert_eq!(run.var("y"), 2.0);
}

#[rstest]
#[case("x=0; while x < 3 do x = x + 1", "x", 3.0)]
#[case("if 1 == 2 then x = 1 else x = 2", "x", 2.0)]
#[case("if 2 >= 2 then x = 1 else x = 2", "x", 1.0)]
#[case("s = 0; i = 1; while i <= 10 do begin s = s + i; i = i + 1 end", "s", 55.0)]
#[case("f = 1; n = 5; while n > 1 do begin f = f * n; n = n - 1; end", "f", 120.0)]
fn test_control_flow(#[case] source: &str, #[case] name: &str, #[case] expected: f64) {
    assert_eq!(run(source).var(name), expected);
}

#[rstest]
#[case("x = 5", 5.0)]
#[case("x = 1; if x < 0 then x = 2", 0.0)]
#[case("x = 1; while x < 0 do x = 2", 0.0)]
#[case("x = 0; while x < 4 do x = x + 2", 4.0)]
#[case("wr 6 * 7", 42.0)]
fn test_statement_values(#[case] source: &str, #[case] expected: f64) {
    assert_program_value(source, expected);
}

#[test]
fn test_relational_operators_yield_one_or_zero() {
    let run = run(
        "if 1 < 2 then a = 1; if 1 <= 1 then b = 1; if 2 > 1 then c = 1; \
         if 1 >= 2 then d = 1 else d = 0; if 1 <> 1 then e = 1 else e = 0",
    );
    assert_eq!(
        (run.var("a"), run.var("b"), run.var("c"), run.var("d"), run.var("e")),
        (1.0, 1.0, 1.0, 0.0, 0.0)
    );
}

// ============================================================================
// I/O
// ============================================================================

#[test]
fn test_write_formats_integral_values_without_fraction() {
    let run = run("wr 3; wr 3 / 2; wr 0 - 4; wr 1 / 3; wr 0 - 0");
    assert_eq!(
        run.stdout,
        format!("3\n1.5\n-4\n{}\n0\n", 1.0_f64 / 3.0)
    );
}

#[test]
fn test_write_infinity() {
    let run = run("wr 1 / 0");
    assert_eq!(run.stdout, "inf\n");
}

#[test]
fn test_read_consumes_whitespace_delimited_tokens() {
    let run = run_with_input("rd a; rd b; rd c; wr a + b + c", "1 2\n\n   3.5\n");
    assert_eq!(run.stdout, "6.5\n");
}

#[test]
fn test_read_non_number_fails() {
    let run = run_with_input("rd a", "twelve");
    assert!(matches!(run.result, Err(EvalError::Read { span, .. }) if span == Span::new(0, 4)));
    assert!(!run.env.contains("a"));
}

#[test]
fn test_echo_loop_until_zero() {
    let run = run_with_input(
        "rd x; while x <> 0 do begin wr x * 2; rd x end",
        "1 2 3 0",
    );
    assert_eq!(run.stdout, "2\n4\n6\n");
}

#[test]
fn test_format_number_integral_check() {
    assert_eq!(format_number(1e15), "1000000000000000");
    assert_eq!(format_number(-2.25), "-2.25");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_undefined_variable_does_not_mutate() {
    let run = run("y = z + 1");
    match run.result {
        Err(EvalError::UndefinedVariable { name, span }) => {
            assert_eq!(name, "z");
            assert_eq!(span, Span::new(4, 5));
        }
        other => panic!("unexpected result {:?}", other),
    }
    assert!(!run.env.contains("y"));
}

#[test]
fn test_error_stops_the_run() {
    let run = run("wr 1; wr q; wr 2");
    assert!(run.result.is_err());
    assert_eq!(run.stdout, "1\n");
}

#[test]
fn test_runs_are_deterministic() {
    let source = "a = 3; b = a * a - 1 / a; c = (a + b) / (b - a)";
    let first = run(source);
    let second = run(source);
    assert_eq!(
        first.result.unwrap().to_bits(),
        second.result.unwrap().to_bits()
    );
    assert_eq!(first.env, second.env);
}
