use cp3_derive::cp3_error;

#[cp3_error]
pub enum DemoError {
    #[error("Internal error: {message}")]
    Internal { message: String, context: Option<String> },
}

fn main() {}
