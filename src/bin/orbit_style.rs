//! `orbit-style`: resolve component styles and maintain design tokens.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use orbit_style::export::{render_listing, write_xcassets, ColorCatalog, ListingFormat};
use orbit_style::{
    import_design_tokens, swatch, ButtonSize, ChoiceShape, ComponentKind, Interaction, Palette,
    Priority, Status, StyleRequest, Theme, TokenCheck, TokenImport,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "orbit-style",
    version,
    about = "Resolve Orbit component styles and maintain design tokens"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the visual attributes of one component state.
    Resolve(ResolveArgs),
    /// Check or export design tokens.
    #[command(subcommand)]
    Tokens(TokensCommand),
}

#[derive(Args)]
struct ResolveArgs {
    #[arg(long, value_enum)]
    kind: KindArg,
    #[arg(long, value_enum)]
    priority: Option<Priority>,
    #[arg(long, value_enum)]
    status: Option<Status>,
    #[arg(long)]
    subtle: bool,
    #[arg(long)]
    pressed: bool,
    #[arg(long)]
    disabled: bool,
    #[arg(long)]
    focused: bool,
    #[arg(long)]
    selected: bool,
    /// Use the small button size.
    #[arg(long)]
    small: bool,
    /// Theme configuration file (YAML, or JSON with a .json extension).
    #[arg(long, value_name = "FILE")]
    theme: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Term)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum TokensCommand {
    /// Compare a design-token export with the built-in palette.
    ///
    /// Exits with status 1 when the export adds, removes or changes any
    /// color, or when `--listing` is out of date.
    Check {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Generated source listing to compare with a fresh export.
        #[arg(long, value_name = "PATH")]
        listing: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "swiftui")]
        format: ListingFormat,
    },
    /// Print a platform color listing, optionally writing an asset catalog.
    Export {
        /// Design-token export to apply on top of the built-in palette.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "swiftui")]
        format: ListingFormat,
        /// Write a `.xcassets` catalog to this directory, replacing it.
        #[arg(long, value_name = "DIR")]
        xcassets: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Button,
    Link,
    Tag,
    Checkbox,
    Radio,
    Input,
}

impl From<KindArg> for ComponentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Button => ComponentKind::Button,
            KindArg::Link => ComponentKind::ButtonLink,
            KindArg::Tag => ComponentKind::Tag,
            KindArg::Checkbox => ComponentKind::ChoiceIndicator(ChoiceShape::Checkbox),
            KindArg::Radio => ComponentKind::ChoiceIndicator(ChoiceShape::Radio),
            KindArg::Input => ComponentKind::InputField,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Term,
    Json,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Resolve(args) => run_resolve(&args).map(|()| ExitCode::SUCCESS),
        Command::Tokens(TokensCommand::Check {
            file,
            listing,
            format,
        }) => run_check(&file, listing.as_deref(), format),
        Command::Tokens(TokensCommand::Export {
            file,
            format,
            xcassets,
        }) => run_export(file.as_deref(), format, xcassets.as_deref()).map(|()| ExitCode::SUCCESS),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("orbit_style={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_resolve(args: &ResolveArgs) -> Result<()> {
    let theme = match &args.theme {
        Some(path) => Theme::load(path)
            .with_context(|| format!("failed to load theme {}", path.display()))?,
        None => Theme::new(),
    };

    let request = style_request(args);
    let attrs = theme.resolve(&request);
    let painted = theme.paint_attributes(&attrs);

    match args.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "request": request,
                "attributes": attrs,
                "painted": painted,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Term => {
            let current_fill = theme.paint(attrs.current_fill());
            let current_label = theme.paint(attrs.current_label());
            println!("{}", swatch("  Orbit  ", current_fill, current_label));
            println!();
            println!("fill          {} ({})", painted.fill, token_label(attrs.fill_color));
            println!("active fill   {} ({})", painted.active_fill, token_label(attrs.active_fill_color));
            println!("label         {} ({})", painted.label, token_label(attrs.label_color));
            println!("active label  {} ({})", painted.active_label, token_label(attrs.active_label_color));
            println!("border        {} ({})", painted.border, token_label(attrs.border_color));
            println!("radius        {}pt", attrs.corner_radius);
            println!("padding       {}pt x {}pt", attrs.horizontal_padding, attrs.vertical_padding);
            println!("haptic        {:?}", attrs.haptic);
        }
    }
    Ok(())
}

fn style_request(args: &ResolveArgs) -> StyleRequest {
    let mut request = StyleRequest::new(args.kind.into()).interaction(Interaction {
        pressed: args.pressed,
        disabled: args.disabled,
        focused: args.focused,
        selected: args.selected,
    });
    request.priority = args.priority;
    request.status = args.status;
    request.subtle = args.subtle;
    if args.small {
        request = request.size(ButtonSize::Small);
    }
    request
}

fn token_label(color: orbit_style::Color) -> String {
    if color.opacity == 100 {
        color.token.key().to_string()
    } else {
        format!("{} @ {}%", color.token.key(), color.opacity)
    }
}

/// Exit status when the checked tokens are out of date.
const EXIT_STALE: u8 = 1;

fn read_tokens(path: &Path, base: &Palette) -> Result<TokenImport> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    import_design_tokens(&source, base).with_context(|| format!("failed to import {}", path.display()))
}

fn run_check(path: &Path, listing: Option<&Path>, format: ListingFormat) -> Result<ExitCode> {
    let base = Palette::orbit();
    let import = read_tokens(path, &base)?;
    let check = import.check(&base);

    let stale_listing = match listing {
        Some(listing_path) => {
            let current = std::fs::read_to_string(listing_path)
                .with_context(|| format!("failed to read {}", listing_path.display()))?;
            let regenerated = render_listing(format, &ColorCatalog::from_import(&import))?;
            (current != regenerated).then_some(listing_path)
        }
        None => None,
    };

    let mut stdout = io::stdout().lock();
    let status = report_check(&check, import.imported.len(), stale_listing, &mut stdout)?;
    Ok(ExitCode::from(status))
}

/// Prints the differences found by a check and returns the exit status.
fn report_check(
    check: &TokenCheck,
    checked: usize,
    stale_listing: Option<&Path>,
    out: &mut impl Write,
) -> io::Result<u8> {
    if check.is_up_to_date() && stale_listing.is_none() {
        writeln!(out, "palette is up to date ({checked} tokens checked)")?;
        return Ok(0);
    }

    for key in &check.added {
        writeln!(out, "added    {key}")?;
    }
    for token in &check.removed {
        writeln!(out, "removed  {}", token.key())?;
    }
    for change in &check.changed {
        writeln!(
            out,
            "changed  {:<22} {} -> {}",
            change.token.key(),
            change.previous,
            change.updated
        )?;
    }
    if let Some(path) = stale_listing {
        writeln!(out, "stale    {}", path.display())?;
    }
    if !check.is_empty() {
        writeln!(out, "{} token(s) differ", check.len())?;
    }
    Ok(EXIT_STALE)
}

fn run_export(
    file: Option<&Path>,
    format: ListingFormat,
    xcassets: Option<&Path>,
) -> Result<()> {
    let catalog = match file {
        Some(path) => ColorCatalog::from_import(&read_tokens(path, &Palette::orbit())?),
        None => ColorCatalog::from_palette(&Palette::orbit()),
    };

    print!("{}", render_listing(format, &catalog)?);

    if let Some(dir) = xcassets {
        write_xcassets(&catalog, dir)
            .with_context(|| format!("failed to write asset catalog {}", dir.display()))?;
    }
    Ok(())
}
