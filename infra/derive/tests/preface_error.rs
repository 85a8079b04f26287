use preface_derive::preface_error;
use std::borrow::Cow;
use std::io;

#[preface_error]
pub enum StoreError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: io::Error, context: Option<Cow<'static, str>> },

    #[error("Unknown entry{}: {name}", format_context(.context))]
    Unknown { name: String, context: Option<Cow<'static, str>> },

    #[error("Store is closed")]
    Closed {},
}

fn read(fail: bool) -> Result<u8, io::Error> {
    if fail { Err(io::Error::other("disk gone")) } else { Ok(7) }
}

#[test]
fn preface_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/preface_error_pass.rs");
}

#[test]
fn source_converts_with_question_mark() {
    fn load() -> Result<u8, StoreError> {
        Ok(read(true)?)
    }

    let err = load().unwrap_err();
    assert!(matches!(err, StoreError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "IO error: disk gone");
}

#[test]
fn context_on_source_result() {
    let err = read(true).context("loading index").unwrap_err();
    assert_eq!(err.to_string(), "IO error (loading index): disk gone");
    assert_eq!(read(false).context("loading index").unwrap(), 7);
}

#[test]
fn context_replaces_existing_context() {
    let result: Result<(), StoreError> =
        Err(StoreError::Unknown { name: "a".to_owned(), context: Some("first".into()) });

    let err = result.context("second").unwrap_err();
    assert_eq!(err.to_string(), "Unknown entry (second): a");
}

#[test]
fn context_skips_variants_without_context() {
    let result: Result<(), StoreError> = Err(StoreError::Closed {});
    let err = result.context("ignored").unwrap_err();
    assert_eq!(err.to_string(), "Store is closed");
}

#[test]
fn source_is_exposed() {
    use std::error::Error as _;

    let err = StoreError::from(io::Error::other("disk gone"));
    assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("disk gone"));
}
