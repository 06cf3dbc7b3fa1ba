pub mod error;
pub mod html;
pub mod model;
pub mod text;

pub use error::RenderError;
pub use html::HtmlRenderer;
pub use model::{RenderContext, ViewerModel};
pub use text::TextRenderer;

use flexdoc_core::{DocumentView, SelectionState};

/// A presentation of the viewer. Implementations read the projected view
/// and the navigation state; neither is modified.
pub trait ViewRenderer {
    fn render(
        &self,
        view: &DocumentView<'_>,
        state: &SelectionState,
        ctx: &RenderContext,
    ) -> Result<String, RenderError>;
}
