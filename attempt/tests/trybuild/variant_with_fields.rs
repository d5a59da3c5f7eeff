use attempt::FailureReason;

#[derive(Debug, FailureReason)]
enum Broken {
    Named(String),
}

fn main() {}
