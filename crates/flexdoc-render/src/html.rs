use minijinja::{AutoEscape, Environment, context};

use flexdoc_core::{DocumentView, SelectionState};

use crate::model::{RenderContext, ViewerModel};
use crate::{RenderError, ViewRenderer};

/// Standalone HTML page: the viewer inside the site shell (navigation bar,
/// theme toggle, footer), styled from the resolved palette.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    fn environment() -> Result<Environment<'static>, RenderError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_template("page.html.j2", include_str!("../templates/html/page.html.j2"))?;
        env.add_template("viewer.html.j2", include_str!("../templates/html/viewer.html.j2"))?;
        Ok(env)
    }
}

impl ViewRenderer for HtmlRenderer {
    fn render(
        &self,
        view: &DocumentView<'_>,
        state: &SelectionState,
        ctx: &RenderContext,
    ) -> Result<String, RenderError> {
        let model = ViewerModel::build(view, state, ctx);
        let env = Self::environment()?;
        let tmpl = env.get_template("page.html.j2")?;
        Ok(tmpl.render(context! {
            view => model,
            shell => ctx.shell,
        })?)
    }
}
