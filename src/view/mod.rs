pub mod console;
pub mod input;

pub use console::ConsoleView;
pub use console::RenderMode;
pub use input::TriggerInput;
