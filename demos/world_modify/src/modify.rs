//! The `modify` command: validates a request and applies it to a world.

use std::fmt;

use attempt::{Attempt, AttemptOptionExt, FailureReason, MessageReplacement, Replace, replace};

use crate::world::{Change, PropertyValue, World, WorldRegistry};

/// Properties that moved elsewhere, with the command that replaces them.
const REMOVED_PROPERTIES: &[(&str, &str)] = &[
    (
        "animals",
        "entity-spawn-config modify [world] animal set spawn <true|false>",
    ),
    (
        "monsters",
        "entity-spawn-config modify [world] monster set spawn <true|false>",
    ),
];

/// What to do with the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModifyAction {
    /// Replace the value.
    Set,
    /// Append to a list.
    Add,
    /// Remove from a list.
    Remove,
    /// Restore the default.
    Reset,
}

impl ModifyAction {
    /// Whether the action needs a value argument.
    #[must_use]
    pub const fn requires_value(self) -> bool {
        !matches!(self, Self::Reset)
    }

    /// Lower-case name used in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Set => "set",
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Reset => "reset",
        }
    }
}

impl fmt::Display for ModifyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reasons the `modify` command refuses a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FailureReason)]
#[failure_reason(prefix = "world.modify")]
pub enum ModifyFailure {
    /// No world has the requested name.
    #[failure_reason(template = "World '{world}' does not exist")]
    UnknownWorld,
    /// The property was retired in favour of another command.
    #[failure_reason(template = "Property {property} has been removed; use '{replacement}' instead")]
    PropertyRemoved,
    /// The action needs a value and none was given.
    #[failure_reason(template = "You must specify a value to {action} property {property}")]
    SpecifyValue,
    /// The action takes no value but one was given.
    #[failure_reason(template = "You cannot specify a value to {action} property {property}")]
    CannotHaveValue,
    /// The world refused a change that carried a value.
    #[failure_reason(
        template = "Unable to {action} property {property} to {value} for world {world}: {error}"
    )]
    Rejected,
    /// The world refused a change without a value.
    #[failure_reason(template = "Unable to {action} property {property} for world {world}: {error}")]
    RejectedNoValue,
}

impl ModifyFailure {
    /// Whether the failure wraps a refusal from the world itself.
    #[must_use]
    pub const fn is_rejection(self) -> bool {
        matches!(self, Self::Rejected | Self::RejectedNoValue)
    }
}

/// A parsed `modify` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyRequest {
    /// Target world name.
    pub world: String,
    /// Requested action.
    pub action: ModifyAction,
    /// Property name.
    pub property: String,
    /// Raw value, when one was given.
    pub value: Option<String>,
}

impl ModifyRequest {
    /// Replacements describing the request, shared by every message about it.
    #[must_use]
    pub fn replacements(&self) -> Vec<MessageReplacement> {
        vec![
            Replace::ACTION.with(self.action.name()),
            Replace::PROPERTY.with(&self.property),
            Replace::VALUE.with(self.value.as_deref()),
            Replace::WORLD.with(&self.world),
        ]
    }

    fn change(&self) -> Attempt<Change<'_>, ModifyFailure> {
        let presence = [
            Replace::ACTION.with(self.action.name()),
            Replace::PROPERTY.with(&self.property),
        ];
        match (self.action, self.value.as_deref()) {
            (ModifyAction::Reset, None) => Attempt::success(Change::Reset),
            (ModifyAction::Reset, Some(_)) => Attempt::failure(ModifyFailure::CannotHaveValue, presence),
            (_, None) => Attempt::failure(ModifyFailure::SpecifyValue, presence),
            (ModifyAction::Set, Some(raw)) => Attempt::success(Change::Set(raw)),
            (ModifyAction::Add, Some(raw)) => Attempt::success(Change::Add(raw)),
            (ModifyAction::Remove, Some(raw)) => Attempt::success(Change::Remove(raw)),
        }
    }

    const fn rejection(&self) -> ModifyFailure {
        if self.value.is_some() {
            ModifyFailure::Rejected
        } else {
            ModifyFailure::RejectedNoValue
        }
    }
}

/// A change the world accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modified {
    /// World that changed.
    pub world: String,
    /// Property that changed.
    pub property: String,
    /// Action that was applied.
    pub action: ModifyAction,
    /// Value stored after the change.
    pub value: PropertyValue,
}

fn check_not_removed(property: &str) -> Attempt<(), ModifyFailure> {
    match REMOVED_PROPERTIES.iter().find(|(name, _)| *name == property) {
        Some((_, replacement)) => Attempt::failure(
            ModifyFailure::PropertyRemoved,
            [
                Replace::PROPERTY.with(property),
                replace("{replacement}").with(*replacement),
            ],
        ),
        None => Attempt::success(()),
    }
}

fn find_world<'r>(registry: &'r mut WorldRegistry, name: &str) -> Attempt<&'r mut World, ModifyFailure> {
    registry
        .world_mut(name)
        .ok_or_failure(ModifyFailure::UnknownWorld, [Replace::WORLD.with(name)])
}

/// Runs the `modify` command against `registry`.
///
/// Checks run in order: world lookup, retired property, value presence, then
/// the change itself. A refusal from the world is re-contextualised as
/// [`ModifyFailure::Rejected`] (or [`ModifyFailure::RejectedNoValue`]) with
/// the world's failure kept as its cause.
pub fn modify(registry: &mut WorldRegistry, request: &ModifyRequest) -> Attempt<Modified, ModifyFailure> {
    find_world(registry, &request.world)
        .map_attempt(|target| check_not_removed(&request.property).map(|()| target))
        .map_attempt(|target| request.change().map(|change| (target, change)))
        .map_attempt(|(target, change)| {
            target
                .apply(&request.property, change)
                .transform(request.rejection())
        })
        .map(|value| Modified {
            world: request.world.clone(),
            property: request.property.clone(),
            action: request.action,
            value,
        })
        .on_failure_reason(|reason| tracing::debug!(?reason, "modify refused"))
}
