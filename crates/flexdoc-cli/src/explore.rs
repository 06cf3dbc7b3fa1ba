use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use flexdoc_core::{Action, DocumentView, SelectionState};
use flexdoc_render::{RenderContext, TextRenderer, ViewRenderer};

const HELP: &str = "\
commands:
  select METHOD-/path   open an endpoint
  clear                 back to the overview
  toggle SECTION        group:NAME, responses, request-body, code-examples
  search TERM           filter the sidebar (empty term clears)
  show                  redraw
  help                  this text
  quit                  leave";

/// Line-oriented session: each accepted action redraws the view. Bad input
/// is reported and the session continues.
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    view: &DocumentView<'_>,
    ctx: &RenderContext,
    mut state: SelectionState,
) -> Result<()> {
    draw(&mut out, view, &state, ctx)?;

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "show" => draw(&mut out, view, &state, ctx)?,
            "help" => writeln!(out, "{HELP}")?,
            command => match command.parse::<Action>() {
                Ok(action) => {
                    log::debug!("apply {action:?}");
                    state.apply(action);
                    draw(&mut out, view, &state, ctx)?;
                }
                Err(e) => writeln!(out, "error: {e} (try `help`)")?,
            },
        }
        out.flush()?;
    }
    Ok(())
}

fn draw<W: Write>(
    out: &mut W,
    view: &DocumentView<'_>,
    state: &SelectionState,
    ctx: &RenderContext,
) -> Result<()> {
    let rendered = TextRenderer.render(view, state, ctx)?;
    writeln!(out, "{rendered}")?;
    writeln!(out, "---")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexdoc_core::sample::sample_document;
    use flexdoc_core::theme::Theme;

    fn session(script: &str) -> String {
        let doc = sample_document().unwrap();
        let view = DocumentView::new(Some(&doc));
        let ctx = RenderContext::new(Theme::Dark);
        let mut out = Vec::new();
        run(script.as_bytes(), &mut out, &view, &ctx, SelectionState::new()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_select_then_clear() {
        let out = session("select get-/orders\nclear\nquit\n");
        let frames: Vec<_> = out.split("---\n").collect();
        assert!(frames[0].contains("API Overview"));
        assert!(frames[1].contains("GET     /orders"));
        assert!(frames[1].contains("Get user orders"));
        assert!(frames[2].contains("API Overview"));
    }

    #[test]
    fn test_bad_command_keeps_session() {
        let out = session("jump /x\ntoggle nowhere\ntoggle group:Orders\n");
        assert!(out.contains("error: unknown command `jump`"));
        assert!(out.contains("error: unknown section `nowhere`"));
        assert!(out.contains("v Orders (2)"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let out = session("quit\nselect GET-/orders\n");
        assert!(!out.contains("Get user orders"));
    }
}
