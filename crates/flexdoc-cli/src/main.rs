mod explore;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use flexdoc_core::config::{self, CONFIG_FILE_NAME, FlexDocConfig};
use flexdoc_core::options::ViewerOptions;
use flexdoc_core::parse;
use flexdoc_core::project::EndpointId;
use flexdoc_core::sample::{self, SAMPLE_ECOMMERCE_YAML};
use flexdoc_core::{DocumentView, OpenApiDocument, SectionId, SelectionState, ThemePreference};
use flexdoc_render::{HtmlRenderer, RenderContext, TextRenderer, ViewRenderer};

#[derive(Parser)]
#[command(name = "flexdoc", about = "Interactive OpenAPI 3.x documentation viewer", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the viewer as terminal text
    View {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        display: DisplayArgs,

        /// Colour method badges with ANSI escapes
        #[arg(long)]
        color: bool,
    },

    /// Render the viewer as a standalone HTML page
    Html {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        display: DisplayArgs,

        /// Write the page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the overview statistics of a document
    Stats {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: OutputFormat,
    },

    /// Validate an OpenAPI spec
    Validate {
        /// Path to the OpenAPI spec file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Browse a document interactively, one command per line
    Explore {
        #[command(flatten)]
        source: SourceArgs,

        /// Theme override
        #[arg(long)]
        theme: Option<ThemeArg>,

        /// Colour method badges with ANSI escapes
        #[arg(long)]
        color: bool,
    },

    /// Print the built-in sample document
    Sample {
        /// Output format
        #[arg(long, default_value = "yaml")]
        format: OutputFormat,
    },

    /// Initialize a new flexdoc configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Path to the OpenAPI spec file (YAML or JSON)
    #[arg(short, long, conflicts_with = "sample")]
    input: Option<PathBuf>,

    /// Use the built-in e-commerce sample document
    #[arg(long)]
    sample: bool,
}

#[derive(Args)]
struct DisplayArgs {
    /// Endpoint to open, e.g. `GET-/products`
    #[arg(long)]
    select: Option<String>,

    /// Section to flip: `group:NAME`, `responses`, `request-body`, `code-examples`
    #[arg(long)]
    toggle: Vec<String>,

    /// Sidebar search term
    #[arg(long)]
    search: Option<String>,

    /// Theme override
    #[arg(long)]
    theme: Option<ThemeArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
    Auto,
}

impl From<ThemeArg> for ThemePreference {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemePreference::Light,
            ThemeArg::Dark => ThemePreference::Dark,
            ThemeArg::Auto => ThemePreference::Auto,
        }
    }
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::View {
            source,
            display,
            color,
        } => cmd_view(source, display, color),

        Commands::Html {
            source,
            display,
            output,
        } => cmd_html(source, display, output),

        Commands::Stats { source, format } => cmd_stats(source, format),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Explore {
            source,
            theme,
            color,
        } => cmd_explore(source, theme, color),

        Commands::Sample { format } => cmd_sample(format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "flexdoc", &mut io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<FlexDocConfig> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    let config = config::load_config(&config_path)?;
    if config.is_some() {
        log::debug!("loaded {}", config_path.display());
    }
    Ok(config.unwrap_or_default())
}

/// The sample when `--sample` is set, else `--input`, else the config
/// `input`. `None` renders the placeholder.
fn load_document(source: &SourceArgs, cfg: &FlexDocConfig) -> Result<Option<OpenApiDocument>> {
    if source.sample {
        return Ok(Some(sample::sample_document()?));
    }
    let path = match (&source.input, &cfg.input) {
        (Some(path), _) => path.clone(),
        (None, Some(path)) => PathBuf::from(path),
        (None, None) => return Ok(None),
    };
    let doc = parse::from_path(&path).with_context(|| format!("failed to load {}", path.display()))?;
    Ok(Some(doc))
}

fn render_context(cfg: &FlexDocConfig, theme: Option<ThemeArg>, color: bool) -> RenderContext {
    let preference = theme.map(ThemePreference::from).unwrap_or(cfg.theme);
    RenderContext {
        theme: preference.resolve(),
        options: cfg.options.clone(),
        palette: cfg.palette.clone(),
        shell: cfg.shell.clone(),
        color,
    }
}

fn initial_state(view: &DocumentView<'_>, options: &ViewerOptions, display: &DisplayArgs) -> Result<SelectionState> {
    let mut state = SelectionState::with_expansion(options.doc_expansion, view.groups().keys().copied());
    if let Some(term) = &display.search {
        state.set_search_term(term.as_str());
    }
    if let Some(raw) = &display.select {
        let id = EndpointId::parse(raw).with_context(|| format!("invalid --select {raw}"))?;
        if view.find(&id).is_none() {
            log::warn!("{id} is not an endpoint of this document");
        }
        state.select_endpoint(id);
    }
    for raw in &display.toggle {
        let section: SectionId = raw.parse().with_context(|| format!("invalid --toggle {raw}"))?;
        state.toggle_section(section);
    }
    Ok(state)
}

fn cmd_view(source: SourceArgs, display: DisplayArgs, color: bool) -> Result<()> {
    let cfg = try_load_config()?;
    let doc = load_document(&source, &cfg)?;
    let view = DocumentView::new(doc.as_ref());
    let ctx = render_context(&cfg, display.theme, color);
    let state = initial_state(&view, &ctx.options, &display)?;

    let out = TextRenderer.render(&view, &state, &ctx)?;
    println!("{out}");
    Ok(())
}

fn cmd_html(source: SourceArgs, display: DisplayArgs, output: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?;
    let doc = load_document(&source, &cfg)?;
    let view = DocumentView::new(doc.as_ref());
    let ctx = render_context(&cfg, display.theme, false);
    let state = initial_state(&view, &ctx.options, &display)?;

    let page = HtmlRenderer.render(&view, &state, &ctx)?;
    match output {
        Some(path) => {
            fs::write(&path, page).with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{page}"),
    }
    Ok(())
}

fn cmd_stats(source: SourceArgs, format: OutputFormat) -> Result<()> {
    let cfg = try_load_config()?;
    let Some(doc) = load_document(&source, &cfg)? else {
        anyhow::bail!("no OpenAPI document given. Use --input, --sample, or set `input` in {CONFIG_FILE_NAME}.");
    };
    let view = DocumentView::new(Some(&doc));
    let summary = build_stats_summary(&doc, &view);

    match format {
        OutputFormat::Yaml => print!("{}", serde_yaml_ng::to_string(&summary)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}

fn build_stats_summary(doc: &OpenApiDocument, view: &DocumentView<'_>) -> serde_json::Value {
    let stats = view.statistics();
    let groups: Vec<serde_json::Value> = view
        .groups()
        .iter()
        .map(|(name, ops)| serde_json::json!({ "name": name, "endpoints": ops.len() }))
        .collect();

    serde_json::json!({
        "info": {
            "title": doc.info.title,
            "version": doc.info.version,
        },
        "endpoints": stats.endpoint_count,
        "servers": stats.server_count,
        "tags": stats.group_count,
        "security_schemes": stats.security_scheme_count,
        "methods": stats.method_counts,
        "groups": groups,
    })
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let parsed = parse::from_path(&input).with_context(|| format!("failed to load {}", input.display()))?;

    eprintln!(
        "Valid OpenAPI {} spec: {}",
        parsed.openapi,
        parsed.info.title.as_deref().unwrap_or("(untitled)")
    );
    if let Some(version) = &parsed.info.version {
        eprintln!("  Version: {version}");
    }
    eprintln!("  Paths: {}", parsed.paths.len());
    if let Some(components) = &parsed.components {
        eprintln!("  Schemas: {}", components.schemas.len());
    }

    let view = DocumentView::new(Some(&parsed));
    eprintln!("  Operations: {}", view.statistics().endpoint_count);
    for (path, item) in &parsed.paths {
        for (method, reason) in item.malformed() {
            eprintln!("  skipped {method} {path}: {reason}");
        }
        for (method, op) in item.operations() {
            if op.display_summary().is_none() {
                eprintln!("  skipped {method} {path}: no summary");
            }
        }
    }

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_explore(source: SourceArgs, theme: Option<ThemeArg>, color: bool) -> Result<()> {
    let cfg = try_load_config()?;
    let doc = load_document(&source, &cfg)?;
    let view = DocumentView::new(doc.as_ref());
    let ctx = render_context(&cfg, theme, color);
    let state = SelectionState::with_expansion(ctx.options.doc_expansion, view.groups().keys().copied());

    let stdin = io::stdin();
    let stdout = io::stdout();
    explore::run(stdin.lock(), stdout.lock(), &view, &ctx, state)
}

fn cmd_sample(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Yaml => print!("{SAMPLE_ECOMMERCE_YAML}"),
        OutputFormat::Json => {
            let doc = sample::sample_document()?;
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &doc)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
