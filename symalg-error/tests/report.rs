use ariadne::Fmt;
use symalg_attrs::ErrorKind;
use symalg_error::{Error, EXPR};

/// A variable could not be found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not bound", name),
    labels = ["this variable"],
    help = format!("bind it with: {}", format!("let {} = <expr>", name).fg(EXPR)),
)]
struct Unbound {
    name: String,
}

/// An error without any labels.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "something went wrong")]
struct Plain;

/// Renders the report of the error as plain text.
fn render(err: &Error, input: &str) -> String {
    let mut buf = Vec::new();
    err.write_report("input", input, &mut buf).unwrap();
    String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
}

#[test]
fn message_and_display() {
    let err = Error::new(vec![4..5], Unbound { name: "y".to_string() });
    assert_eq!(err.to_string(), "`y` is not bound");
}

#[test]
fn downcast_kind() {
    let err = Error::new(vec![0..1], Unbound { name: "x".to_string() });
    assert!(err.is::<Unbound>());
    assert!(!err.is::<Plain>());
    assert_eq!(err.downcast_ref::<Unbound>(), Some(&Unbound { name: "x".to_string() }));
}

#[test]
fn report_with_span() {
    let err = Error::new(vec![5..6], Unbound { name: "y".to_string() });
    let text = render(&err, "(x + y)");
    assert!(text.contains("`y` is not bound"));
    assert!(text.contains("this variable"));
    assert!(text.contains("let y = <expr>"));
}

#[test]
fn report_without_span() {
    // labels without spans are dropped
    let err = Error::unspanned(Unbound { name: "z".to_string() });
    let text = render(&err, "z");
    assert!(text.contains("`z` is not bound"));
    assert!(!text.contains("this variable"));

    let err = Error::unspanned(Plain);
    assert!(render(&err, "").contains("something went wrong"));
}
