use forno_derive::forno_error;

#[forno_error]
pub struct DemoError {
    message: String,
}

fn main() {}
