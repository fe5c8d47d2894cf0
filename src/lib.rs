pub mod catalog;
pub mod session;
pub mod spin;
pub mod wheel;

pub use catalog::{Catalog, Modifier, ModifierKind, Prompt, Rule, RuleGroup};
pub use session::SessionRule;
pub use spin::SpinOutcome;
pub use wheel::{populate_wheel, WheelGame, WheelItem, WheelItemData, WheelItemKind};
