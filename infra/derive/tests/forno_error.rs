use forno_derive::forno_error;
use std::borrow::Cow;

#[forno_error]
pub enum SampleError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid input{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn failing_io() -> Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
}

#[test]
fn forno_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/forno_error_pass.rs");
    t.compile_fail("tests/ui/forno_error_no_context.rs");
    t.compile_fail("tests/ui/forno_error_bad_context_type.rs");
    t.compile_fail("tests/ui/forno_error_tuple_variant.rs");
    t.compile_fail("tests/ui/forno_error_not_enum.rs");
}

#[test]
fn source_errors_convert_with_question_mark() {
    fn run() -> Result<(), SampleError> {
        failing_io()?;
        Ok(())
    }

    let err = run().expect_err("io failure should propagate");
    assert!(matches!(err, SampleError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "IO error: missing");
}

#[test]
fn context_is_attached_to_source_results() {
    let err = failing_io().context("Reading order file").expect_err("io failure expected");

    assert!(matches!(err, SampleError::Io { context: Some(_), .. }));
    assert_eq!(err.to_string(), "IO error (Reading order file): missing");
}

#[test]
fn context_is_attached_to_own_results() {
    let result: Result<(), SampleError> =
        Err(SampleError::Invalid { message: "empty name".into(), context: None });

    let err = result.context("Validating input").expect_err("error expected");
    assert_eq!(err.to_string(), "Invalid input (Validating input): empty name");
}

#[test]
fn strings_convert_into_internal_variant() {
    let borrowed = SampleError::from("static failure");
    let owned = SampleError::from(format!("dynamic failure {}", 42));

    assert!(matches!(borrowed, SampleError::Internal { .. }));
    assert_eq!(owned.to_string(), "Internal error: dynamic failure 42");
}
