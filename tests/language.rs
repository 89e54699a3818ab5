use deskcalc::{eval_script, repl};

fn assert_result(script: &str, expected: f64) {
    match eval_script(script) {
        Ok(Some(value)) => {
            assert!((value - expected).abs() < 1e-9,
                    "Script '{script}' evaluated to {value}, expected {expected}");
        },
        Ok(None) => panic!("Script '{script}' produced no value"),
        Err(e) => panic!("Script '{script}' failed: {e}"),
    }
}

fn assert_failure(script: &str) {
    if eval_script(script).is_ok() {
        panic!("Script '{script}' succeeded but was expected to fail")
    }
}

fn run_session(input: &str) -> (String, String) {
    let mut output = Vec::new();
    let mut diagnostics = Vec::new();

    repl::run(input.as_bytes(), &mut output, &mut diagnostics).expect("session failed");

    (String::from_utf8(output).unwrap(), String::from_utf8(diagnostics).unwrap())
}

#[test]
fn precedence_and_associativity() {
    assert_result("2 + 3 * 4;", 14.0);
    assert_result("2 * 3 + 4;", 10.0);
    assert_result("(2 + 3) * 4;", 20.0);
    assert_result("8 - 3 - 2;", 3.0);
    assert_result("8 / 4 / 2;", 1.0);
    assert_result("10 - 2 + 3;", 11.0);
}

#[test]
fn unary_minus_binds_tighter_than_multiplication() {
    assert_result("-2 * 3;", -6.0);
    assert_result("2 * -3;", -6.0);
    assert_result("7 - -2;", 9.0);
    assert_result("--5;", 5.0);
}

#[test]
fn division_produces_fractions() {
    assert_result("5 / 2;", 2.5);
    assert_result("1 / 8;", 0.125);
}

#[test]
fn remainder_sign_follows_the_dividend() {
    assert_result("7 % 3;", 1.0);
    assert_result("-7 % 3;", -1.0);
    assert_result("7 % -3;", 1.0);
    assert_result("7.5 % 2;", 1.5);
}

#[test]
fn division_and_remainder_by_zero_fail() {
    assert_failure("5 / 0;");
    assert_failure("5 % 0;");
    assert_failure("1 / (2 - 2);");
}

#[test]
fn assignment_returns_and_persists() {
    assert_result("x = 5;", 5.0);
    assert_result("x = 5; x + 1;", 6.0);
}

#[test]
fn chained_and_embedded_assignment() {
    assert_result("x = y = 3; x + y;", 6.0);
    assert_result("2 * (x = 4);", 8.0);
    assert_result("2 * (x = 4); x;", 4.0);
}

#[test]
fn unbound_names_read_as_zero() {
    assert_result("never_set + 1;", 1.0);
    assert_result("a + b;", 0.0);
}

#[test]
fn constants_are_seeded() {
    assert_result("pi;", 3.14159);
    assert_result("e;", 2.71828);
    assert_result("k;", 1000.0);
    assert_result("light;", 299_792_458.0);
    assert_result("2 * pi;", 6.28318);
}

#[test]
fn constants_are_plain_variables() {
    assert_result("pi = 3; pi;", 3.0);
}

#[test]
fn let_is_an_ordinary_variable() {
    assert_result("let;", 0.0);
    assert_result("let = 5; let + 1;", 6.0);
}

#[test]
fn parentheses_nest_arbitrarily() {
    assert_result("((1 + 2) * (3 + 4));", 21.0);
    assert_result("(((((5)))));", 5.0);
}

#[test]
fn numeric_literal_forms() {
    assert_result(".5 + .5;", 1.0);
    assert_result("2e3;", 2000.0);
    assert_result("1.5e-2;", 0.015);
    assert_result("1E2;", 100.0);
}

#[test]
fn identifiers_may_contain_digits_and_underscores() {
    assert_result("rate_2 = 10; rate_2 * 2;", 20.0);
}

#[test]
fn quit_is_not_recognized_inside_identifiers() {
    assert_result("quad = 7; quad;", 7.0);
    assert_result("eq = 2; eq * eq;", 4.0);
}

#[test]
fn malformed_input_fails() {
    assert_failure("1 ? 2;");
    assert_failure("2 + &;");
    assert_failure("1.2.3;");
    assert_failure("(1 + 2;");
    assert_failure(") + 1;");
    assert_failure("1 + ;");
}

#[test]
fn quit_stops_script_evaluation() {
    assert_eq!(eval_script("2 + 2; q 9 * 9;").unwrap(), Some(4.0));
    assert_eq!(eval_script("q 1 + 2;").unwrap(), None);
    assert_eq!(eval_script("q").unwrap(), None);
}

#[test]
fn session_prompts_and_prints_results() {
    let (output, diagnostics) = run_session("1 + 1;\nq\n");

    assert!(output.starts_with("> "), "missing prompt in {output:?}");
    assert!(output.contains("= 2"), "missing result in {output:?}");
    assert!(diagnostics.is_empty(), "unexpected diagnostics: {diagnostics:?}");
}

#[test]
fn session_recovers_after_a_syntax_error() {
    let (output, diagnostics) = run_session(") + ;\n3 + 4;\nq\n");

    assert!(output.contains("= 7"), "missing result in {output:?}");
    assert_eq!(diagnostics.lines().count(), 1, "diagnostics: {diagnostics:?}");
    assert!(diagnostics.starts_with("Error on line"),
            "diagnostics: {diagnostics:?}");
}

#[test]
fn session_continues_after_division_by_zero() {
    let (output, diagnostics) = run_session("5 / 0;\n8;\nq\n");

    assert!(diagnostics.contains("Division by zero"),
            "diagnostics: {diagnostics:?}");
    assert!(output.contains("= 8"), "missing result in {output:?}");
}

#[test]
fn session_state_survives_errors() {
    let (output, _) = run_session("x = 6;\nx / 0;\nx * 7;\nq\n");

    assert!(output.contains("= 42"), "missing result in {output:?}");
}

#[test]
fn quit_ignores_trailing_input() {
    let (output, diagnostics) = run_session("q 1 + 1;\n");

    assert!(!output.contains('='), "unexpected result in {output:?}");
    assert!(diagnostics.is_empty(), "unexpected diagnostics: {diagnostics:?}");
}

#[test]
fn exhausted_input_ends_the_session_cleanly() {
    let (output, diagnostics) = run_session("1 + 1;");

    assert!(output.contains("= 2"), "missing result in {output:?}");
    assert!(diagnostics.is_empty(), "unexpected diagnostics: {diagnostics:?}");
}

#[test]
fn statements_share_one_line_oriented_stream() {
    let (output, _) = run_session("1 +\n1;\n2 + 2; 3 + 3;\nq\n");

    assert!(output.contains("= 2"), "missing result in {output:?}");
    assert!(output.contains("= 4"), "missing result in {output:?}");
    assert!(output.contains("= 6"), "missing result in {output:?}");
}

#[test]
fn diagnostics_carry_line_numbers() {
    let (_, diagnostics) = run_session("1 + 1;\n\n5 / 0;\nq\n");

    assert!(diagnostics.contains("line 3"), "diagnostics: {diagnostics:?}");
}
