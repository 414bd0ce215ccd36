//! EditorIntent- und EditorCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod input;
mod intent;

pub use command::EditorCommand;
pub use input::{EntityRef, InputFrame, Key, Modifiers};
pub use intent::EditorIntent;
