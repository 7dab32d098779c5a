use std::{fs, path::Path};

use spl::{
    config::Config,
    error::{Error, ParseError, RuntimeError},
    get_result,
    interpreter::driver::{Interpreter, Step},
    run_file,
};
use walkdir::WalkDir;

#[test]
fn sample_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "spl"))
    {
        let path = entry.path();
        let expected = fs::read_to_string(path.with_extension("out"))
            .unwrap_or_else(|e| panic!("Missing expectation for {path:?}: {e}"));

        count += 1;
        match run_file(path, &Config::default()) {
            Ok(Some(result)) => assert_eq!(format!("Output={result}"),
                                           expected.trim(),
                                           "Program {path:?} produced the wrong output"),
            Ok(None) => panic!("Program {path:?} produced no output"),
            Err(e) => panic!("Program {path:?} failed:\nError: {e}"),
        }
    }

    assert!(count > 0, "No sample programs found in tests/programs");
}

fn program(body: &[&str]) -> String {
    let mut source = String::from("function main\nbegin\n");
    for line in body {
        source.push_str(line);
        source.push('\n');
    }
    source.push_str("end\n");
    source
}

fn assert_output(src: &str, expected: i64) {
    match get_result(src, &Config::default()) {
        Ok(result) => assert_eq!(result, Some(expected), "Script:\n{src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn run_err(src: &str) -> Error {
    get_result(src, &Config::default()).expect_err("Script succeeded but was expected to fail")
}

fn strict() -> Config {
    Config { strict: true,
             ..Config::default() }
}

#[test]
fn declared_variables_evaluate_to_their_digit() {
    for digit in 0..=9 {
        let declaration = format!("int v = {digit}");
        assert_output(&program(&[&declaration, "( v )"]), digit);
    }
}

#[test]
fn sum_of_two_variables() {
    assert_output(&program(&["int a = 3", "int b = 4", "( a + b )"]), 7);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_output(&program(&["( 2 + 3 * 2 )"]), 8);
    assert_output(&program(&["( 2 * 3 + 2 )"]), 8);
    assert_output(&program(&["( 9 - 8 / 2 )"]), 5);
}

#[test]
fn equal_priorities_associate_left() {
    assert_output(&program(&["( 8 - 3 - 2 )"]), 3);
    assert_output(&program(&["( 8 / 2 / 2 )"]), 2);
}

#[test]
fn inner_parentheses_group_once() {
    assert_output(&program(&["( ( 1 + 2 ) * 3 )"]), 9);
}

#[test]
fn division_truncates() {
    assert_output(&program(&["( 7 / 2 )"]), 3);
}

#[test]
fn missing_left_operand_counts_as_zero() {
    assert_output(&program(&["( - 3 )"]), -3);
}

#[test]
fn repeated_evaluation_is_stable() {
    assert_output(&program(&["( 4 - 1 )", "( 4 - 1 )", "( 4 - 1 )"]), 3);
}

#[test]
fn result_is_the_last_expression_of_main() {
    assert_output(&program(&["( 1 + 1 )", "int a = 5", "( a * 1 )"]), 5);
}

#[test]
fn variable_defaults_to_zero_and_equals_is_optional() {
    assert_output(&program(&["int a", "int b 6", "( a + b )"]), 6);
}

#[test]
fn keywords_are_case_insensitive() {
    assert_output("FUNCTION main\nBegin\nInt a = 2\n( a )\nEND\n", 2);
}

#[test]
fn call_result_combines_with_surrounding_operator() {
    let src = "function f x\nbegin\n( x )\nend\n".to_string() + &program(&["( f(5) + 1 )"]);
    assert_output(&src, 6);
}

#[test]
fn call_with_variable_argument() {
    let src = "function d n\nbegin\n( n * 2 )\nend\n".to_string()
              + &program(&["int a = 4", "( 1 + d(a) )"]);
    assert_output(&src, 9);
}

#[test]
fn returned_values_may_leave_the_digit_range() {
    let src = "function t x\nbegin\n( x * 3 )\nend\n".to_string() + &program(&["( t(4) + 1 )"]);
    assert_output(&src, 13);
}

#[test]
fn callee_sees_caller_variables() {
    let src = "function f x\nbegin\n( x + a )\nend\n".to_string()
              + &program(&["int a = 2", "( f(3) )"]);
    assert_output(&src, 5);
}

#[test]
fn callee_can_call_another_function() {
    let src = "function g y\nbegin\n( y * 2 )\nend\nfunction f x\nbegin\n( g(x) + 1 )\nend\n".to_string()
              + &program(&["( f(3) )"]);
    assert_output(&src, 7);
}

#[test]
fn callee_bindings_are_dropped_after_return() {
    let src = "function f x\nbegin\n( x )\nend\n".to_string()
              + &program(&["( f(2) )", "( x )"]);
    assert!(matches!(run_err(&src),
                     Error::Runtime(RuntimeError::UnknownIdentifier { name: 'x', .. })));
}

#[test]
fn statements_before_main_are_not_executed() {
    let src = "int a = 5\n".to_string() + &program(&["( a )"]);
    assert!(matches!(run_err(&src),
                     Error::Runtime(RuntimeError::UnknownIdentifier { name: 'a', .. })));
}

#[test]
fn code_after_main_is_never_reached() {
    let src = program(&["( 1 )"]) + "function g\nbegin\n( 9 )\nend\n";
    assert_output(&src, 1);
}

#[test]
fn program_without_main_has_no_result() {
    let src = "function f x\nbegin\n( x )\nend\n";
    assert_eq!(get_result(src, &Config::default()).unwrap(), None);
}

#[test]
fn unknown_identifier_is_error() {
    assert!(matches!(run_err(&program(&["( z + 1 )"])),
                     Error::Runtime(RuntimeError::UnknownIdentifier { name: 'z', line: 3 })));
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(run_err(&program(&["( 1 / 0 )"])),
                     Error::Runtime(RuntimeError::DivisionByZero { line: 3 })));
}

#[test]
fn empty_expression_is_error() {
    assert!(matches!(run_err(&program(&["( )"])),
                     Error::Runtime(RuntimeError::EmptyExpression { .. })));
}

#[test]
fn spaced_call_site_is_error() {
    let src = "function f x\nbegin\n( x )\nend\n".to_string() + &program(&["( f (5) )"]);
    assert!(matches!(run_err(&src),
                     Error::Runtime(RuntimeError::MalformedCall { name: 'f', .. })));
}

#[test]
fn function_as_argument_is_error() {
    let src = "function f x\nbegin\n( x )\nend\n".to_string() + &program(&["( f(f) )"]);
    assert!(matches!(run_err(&src),
                     Error::Runtime(RuntimeError::InvalidArgument { name: 'f', .. })));
}

#[test]
fn second_call_in_one_expression_is_error() {
    let src = "function f x\nbegin\n( x )\nend\n".to_string() + &program(&["( f(1) + f(2) )"]);
    assert!(matches!(run_err(&src),
                     Error::Runtime(RuntimeError::MultipleCalls { name: 'f', .. })));
}

#[test]
fn runaway_recursion_exhausts_the_stack() {
    let src = "function f x\nbegin\n( f(x) )\nend\n".to_string() + &program(&["( f(1) )"]);
    let config = Config { max_bindings: 64,
                          ..Config::default() };

    let err = get_result(&src, &config).expect_err("recursion should not terminate");
    assert!(matches!(err, Error::Runtime(RuntimeError::ResourceExhausted { limit: 64, .. })));
    assert_eq!(err.exit_code(), Error::EXIT_RUNTIME);
}

#[test]
fn malformed_lines_are_skipped() {
    assert_output(&program(&["int a = 2", "int a = 12", "this is not spl", "( a )"]), 2);
}

#[test]
fn strict_mode_reports_malformed_lines() {
    let src = program(&["int a = 12", "( a )"]);
    let err = get_result(&src, &strict()).expect_err("strict mode should reject the literal");

    assert!(matches!(err, Error::Parse(ParseError::LiteralTooLarge { line: 3, .. })));
    assert_eq!(err.exit_code(), Error::EXIT_PARSE);
}

#[test]
fn strict_mode_rejects_long_names_in_expressions() {
    let src = program(&["int a = 1", "( ab + 1 )"]);

    assert!(matches!(get_result(&src, &strict()),
                     Err(Error::Parse(ParseError::IdentifierTooLong { line: 4, .. }))));
}

#[test]
fn strict_mode_accepts_well_formed_programs() {
    let src = "function f x\nbegin\n( x + 1 )\nend\n".to_string() + &program(&["( f(2) * 2 )"]);
    assert_eq!(get_result(&src, &strict()).unwrap(), Some(6));
}

#[test]
fn missing_file_is_source_unavailable() {
    let err = run_file(Path::new("tests/programs/does_not_exist.spl"), &Config::default())
        .expect_err("missing file should fail");

    assert!(matches!(err, Error::SourceUnavailable { .. }));
    assert_eq!(err.exit_code(), Error::EXIT_SOURCE_UNAVAILABLE);
}

#[test]
fn stepping_follows_the_call_protocol() {
    let src = "function f x\nbegin\n( x )\nend\nfunction main\nbegin\n( f(5) + 1 )\nend\n";
    let mut interpreter = Interpreter::new(src, Config::default());

    let mut steps = Vec::new();
    loop {
        let step = interpreter.step().unwrap();
        steps.push(step);
        if matches!(step, Step::Terminated(_)) {
            break;
        }
    }

    let relocations: Vec<_> = steps.iter()
                                   .filter_map(|step| match step {
                                       Step::Relocated { line } => Some(*line),
                                       _ => None,
                                   })
                                   .collect();
    assert_eq!(relocations, vec![1, 7]);
    assert_eq!(steps.last(), Some(&Step::Terminated(Some(6))));
    assert_eq!(interpreter.context().pending_return, None);
}

#[test]
fn errors_report_their_line() {
    let Error::Runtime(err) = run_err(&program(&["int a = 1", "( a / 0 )"])) else {
        panic!("expected a runtime error");
    };
    assert_eq!(err.line(), 4);

    let Error::Parse(err) = get_result(&program(&["end end"]), &strict()).unwrap_err() else {
        panic!("expected a parse error");
    };
    assert_eq!(err.line(), 3);
}
