use crate::cli::commands::{resolve_clock, resolve_source};
use crate::cli::parser::Commands;
use crate::config::{Config, OutputFormat};
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::host::renderer::{JsonRenderer, Renderer, TerminalRenderer};
use crate::ui::messages::{header, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { punches, at, json } = cmd {
        let source = resolve_source(punches, cfg)?;
        let clock = resolve_clock(at.as_ref())?;
        let now = clock.now();

        let sessions = source.sessions();
        let Some(bundle) = Core::build_display(sessions.as_deref(), now) else {
            info("Nothing to show yet: no sessions found.");
            return Ok(());
        };

        let mut renderer: Box<dyn Renderer> = if *json || cfg.output == OutputFormat::Json {
            Box::new(JsonRenderer)
        } else {
            header(format!("Workday at {}", now.format_12h()));
            Box::new(TerminalRenderer::new())
        };

        for brk in &bundle.breaks {
            renderer.annotate_break(brk);
        }
        renderer.render(&bundle);
    }
    Ok(())
}
