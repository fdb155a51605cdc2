use forno_derive::forno_error;

#[forno_error]
pub enum DemoError {
    Io(std::io::Error),
}

fn main() {}
