use attempt::FailureReason;

#[derive(Debug, FailureReason)]
enum Typo {
    #[failure_reason(tempalte = "Oops")]
    Misspelt,
}

fn main() {}
