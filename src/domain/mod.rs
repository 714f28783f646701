pub mod account;
pub mod bank;
pub mod movement;

pub use account::Account;
pub use bank::Bank;
pub use movement::{Movement, MovementKind};

use uuid::Uuid;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}
