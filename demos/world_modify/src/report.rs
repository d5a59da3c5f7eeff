//! Turns the outcome of a `modify` run into user-facing text.

use std::io::{self, Write};
use std::process::ExitCode;

use attempt::{Attempt, Failure, FailureReason, Localizer, Message, Replace};

use crate::modify::{ModifyFailure, ModifyRequest, Modified};

/// Key of the confirmation printed after a successful change.
pub const SUCCESS_KEY: &str = "world.modify.success";
const SUCCESS_TEMPLATE: &str = "Property {property} of world {world} is now {value}.";

/// Rendered result of a `modify` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Confirmation for stdout.
    Changed(String),
    /// Explanation for stderr.
    Refused(String),
}

impl Report {
    /// Renders `outcome` with `localizer`.
    ///
    /// With `explain` set, a refusal also lists each upstream failure on its
    /// own `Caused by:` line.
    #[must_use]
    pub fn from_outcome(
        outcome: Attempt<Modified, ModifyFailure>,
        request: &ModifyRequest,
        localizer: &dyn Localizer,
        explain: bool,
    ) -> Self {
        outcome.fold(
            |failure| Self::Refused(refusal_text(&failure, request, localizer, explain)),
            |modified| Self::Changed(confirmation(&modified).render(localizer)),
        )
    }

    /// Rendered text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Changed(text) | Self::Refused(text) => text,
        }
    }

    /// Whether the change was applied.
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }

    /// Process exit status matching the report.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.is_changed() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }

    /// Writes the report to `stdout` or `stderr` depending on the outcome.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while writing.
    pub fn write_to(&self, stdout: &mut impl Write, stderr: &mut impl Write) -> io::Result<()> {
        match self {
            Self::Changed(text) => writeln!(stdout, "{text}"),
            Self::Refused(text) => writeln!(stderr, "{text}"),
        }
    }
}

fn confirmation(modified: &Modified) -> Message {
    Message::keyed(
        SUCCESS_KEY,
        SUCCESS_TEMPLATE,
        [
            Replace::PROPERTY.with(&modified.property),
            Replace::WORLD.with(&modified.world),
            Replace::VALUE.with(modified.value.to_string()),
        ],
    )
}

fn refusal_text(
    failure: &Failure<ModifyFailure>,
    request: &ModifyRequest,
    localizer: &dyn Localizer,
    explain: bool,
) -> String {
    let reason = failure.reason();
    if !reason.is_rejection() {
        return failure.render(localizer);
    }
    // The world's message travels with the rejection; wrap it in the
    // request's context.
    let summary = Message::of(
        reason,
        reason.default_template(),
        request
            .replacements()
            .into_iter()
            .chain([Replace::ERROR.with(failure.message().clone())]),
    )
    .render(localizer);
    if !explain {
        return summary;
    }
    failure
        .causes()
        .map(|cause| cause.render_as_cause(localizer))
        .fold(summary, |text, line| format!("{text}\n{line}"))
}
