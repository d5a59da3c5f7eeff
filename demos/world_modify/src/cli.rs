//! Command-line surface of the demo.

use clap::Parser;

use crate::localization::DemoLocale;
use crate::modify::{ModifyAction, ModifyRequest};

/// Modify a property of a world.
#[derive(Debug, Clone, Parser)]
#[command(name = "world_modify", version, about = "Modify a property of a world")]
pub struct WorldModifyCli {
    /// Language for messages.
    #[arg(long, value_enum, default_value_t = DemoLocale::EnUs)]
    pub locale: DemoLocale,
    /// List every upstream failure when the change is refused.
    #[arg(long)]
    pub explain: bool,
    /// World to modify.
    pub world: String,
    /// What to do with the property.
    #[arg(value_enum)]
    pub action: ModifyAction,
    /// Property to modify.
    pub property: String,
    /// New value, or the list item for `add` and `remove`.
    pub value: Option<String>,
}

impl WorldModifyCli {
    /// Request described by the arguments.
    #[must_use]
    pub fn request(&self) -> ModifyRequest {
        ModifyRequest {
            world: self.world.clone(),
            action: self.action,
            property: self.property.clone(),
            value: self.value.clone(),
        }
    }
}
