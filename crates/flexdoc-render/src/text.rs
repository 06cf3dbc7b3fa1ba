use minijinja::{AutoEscape, Environment, context};

use flexdoc_core::theme::MethodColor;
use flexdoc_core::{DocumentView, SelectionState};

use crate::model::{RenderContext, ViewerModel};
use crate::{RenderError, ViewRenderer};

/// Width of the method column in the sidebar and detail header.
const BADGE_WIDTH: usize = 7;

/// Plain-text rendering for terminals.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl TextRenderer {
    fn environment(color: bool) -> Result<Environment<'static>, RenderError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter("badge", move |method: String| badge(&method, color));
        env.add_template("viewer.txt.j2", include_str!("../templates/text/viewer.txt.j2"))?;
        env.add_template("sidebar.txt.j2", include_str!("../templates/text/sidebar.txt.j2"))?;
        env.add_template("overview.txt.j2", include_str!("../templates/text/overview.txt.j2"))?;
        env.add_template("detail.txt.j2", include_str!("../templates/text/detail.txt.j2"))?;
        Ok(env)
    }
}

impl ViewRenderer for TextRenderer {
    fn render(
        &self,
        view: &DocumentView<'_>,
        state: &SelectionState,
        ctx: &RenderContext,
    ) -> Result<String, RenderError> {
        let model = ViewerModel::build(view, state, ctx);
        let env = Self::environment(ctx.color)?;
        let tmpl = env.get_template("viewer.txt.j2")?;
        Ok(tmpl.render(context! { view => model })?)
    }
}

/// Method name padded to a fixed column, optionally wrapped in its ANSI colour.
fn badge(method: &str, color: bool) -> String {
    let padded = format!("{method:<BADGE_WIDTH$}");
    if color {
        let code = MethodColor::for_method(method).ansi();
        format!("\x1b[1;{code}m{padded}\x1b[0m")
    } else {
        padded
    }
}
