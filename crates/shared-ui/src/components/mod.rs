// Standalone components (no primitives)
pub mod button;
pub mod card;
pub mod input;
pub mod skeleton;

// Primitive wrappers
pub mod alert_dialog;
pub mod label;
pub mod separator;
pub mod toast;

// Re-exports for convenience
pub use alert_dialog::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use label::*;
pub use separator::*;
pub use skeleton::*;
pub use toast::*;
