use cp3_derive::cp3_error;
use std::borrow::Cow;

#[cp3_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[cfg(unix)]
    #[error("Unix-only error{}: {message}", format_context(.context))]
    UnixOnly { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let _ = DemoError::from("boom");
}
