use forno_derive::forno_error;

#[forno_error]
pub enum DemoError {
    #[error("Invalid input: {message}")]
    Invalid { message: String, context: Option<String> },
}

fn main() {}
