//! Keys default to kebab-case variant names under the container prefix.

use attempt::{Attempt, FailureReason, replace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, FailureReason)]
#[failure_reason(prefix = "world.modify")]
enum ModifyFailure {
    #[failure_reason(template = "World '{world}' is not valid")]
    InvalidWorld,
    #[failure_reason(key = "property.unknown")]
    UnknownProperty,
    Rejected,
}

fn main() {
    assert_eq!(
        ModifyFailure::InvalidWorld.message_key(),
        "world.modify.invalid-world"
    );
    assert_eq!(
        ModifyFailure::UnknownProperty.message_key(),
        "world.modify.property.unknown"
    );
    assert_eq!(ModifyFailure::Rejected.message_key(), "world.modify.rejected");
    assert_eq!(ModifyFailure::Rejected.default_template(), "Failed!");

    let failed: Attempt<(), _> = Attempt::failure(
        ModifyFailure::InvalidWorld,
        [replace("{world}").with("nether")],
    );
    assert_eq!(
        failed.failure_message().to_string(),
        "World 'nether' is not valid"
    );
}
