pub mod config;
pub mod error;
pub mod options;
pub mod parse;
pub mod project;
pub mod sample;
pub mod state;
pub mod theme;

pub use options::ViewerOptions;
pub use parse::OpenApiDocument;
pub use project::DocumentView;
pub use state::{Action, SectionId, SelectionState, ViewMode};
pub use theme::{Theme, ThemePreference};
