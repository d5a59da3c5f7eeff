//! Unit structs derive a single key from the type name.

use attempt::FailureReason;

#[derive(Debug, FailureReason)]
#[failure_reason(prefix = "net", template = "Request timed out")]
struct TimedOut;

fn main() {
    assert_eq!(TimedOut.message_key(), "net.timed-out");
    assert_eq!(TimedOut.default_template(), "Request timed out");
}
