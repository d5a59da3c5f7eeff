//! `#[failure_reason(crate = "...")]` routes generated paths through an alias.

use attempt as failures;
use failures::{Attempt, FailureReason};

#[derive(Debug, PartialEq, FailureReason)]
#[failure_reason(crate = "failures")]
enum Aliased {
    #[failure_reason(template = "aliased failure")]
    Broken,
}

fn main() {
    let failed: Attempt<u8, Aliased> = Attempt::failure(Aliased::Broken, []);
    assert_eq!(failed.failure_reason(), &Aliased::Broken);
    assert_eq!(failed.failure_message().to_string(), "aliased failure");
}
