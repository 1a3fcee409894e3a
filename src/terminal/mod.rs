//! Terminal front end: login screen, menu, input forms and output

pub mod forms;
pub mod menu;
pub mod prompt;
pub mod render;
pub mod session;

pub use prompt::{EditorPrompt, Prompt, ScriptedPrompt};
pub use session::{run_session, SessionEnd};
