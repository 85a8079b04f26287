use preface_derive::preface_error;
use std::borrow::Cow;

#[preface_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Unknown entry{}: {name}", format_context(.context))]
    Unknown { name: String, context: Option<Cow<'static, str>> },

    #[error("Nothing to do")]
    Empty {},
}

fn main() {
    let err: DemoError = std::io::Error::other("disk").into();
    let _ = format!("{err:?}");
}
