use clap::{Parser, Subcommand};
use std::{path::PathBuf, sync::Arc};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use slaysafe::{
    AppConfig, Catalog, LocationTask, Navigator, Route, Tab, ViewState,
    location::ProviderConfig,
    presenter::{self, render_text, render_welcome_text},
};

#[derive(Parser)]
#[command(name = "slaysafe")]
#[command(about = "Find venues and safety resources for a night out")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Catalog fixture to use instead of the built-in one
    #[arg(long, value_name = "FILE", global = true)]
    catalog: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the desktop app
    #[cfg(feature = "gui")]
    Gui,
    /// Print the welcome screen
    Welcome,
    /// Resolve location once and print the home screen
    Render {
        #[arg(long, value_enum, default_value_t = Tab::Venues)]
        tab: Tab,

        /// Open the detail overlay for this venue id
        #[arg(long, value_name = "ID")]
        select: Option<String>,

        /// Behave as if location permission was denied
        #[arg(long)]
        deny_location: bool,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if args.catalog.is_some() {
        config.catalog = args.catalog.clone();
    }
    let catalog = match &config.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };
    info!(
        venues = catalog.venues.len(),
        events = catalog.events.len(),
        tips = catalog.safety_tips.len(),
        "catalog ready"
    );

    match args.command {
        #[cfg(feature = "gui")]
        None | Some(Command::Gui) => slaysafe::gui::run(config, catalog),
        #[cfg(not(feature = "gui"))]
        None => render(config, catalog, Tab::Venues, None, false),
        Some(Command::Welcome) => {
            print!("{}", render_welcome_text(&presenter::present_welcome()));
            Ok(())
        }
        Some(Command::Render {
            tab,
            select,
            deny_location,
            json,
        }) => {
            if deny_location {
                config.location.provider = ProviderConfig::Denied;
            }
            render(config, catalog, tab, select, json)
        }
    }
}

fn render(
    config: AppConfig,
    catalog: Catalog,
    tab: Tab,
    select: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let mut navigator = Navigator::new();
    navigator.navigate(Route::Home)?;

    let provider = Arc::new(config.location.provider.build());
    let runtime = tokio::runtime::Runtime::new()?;
    let timeout = config.location.timeout();
    let location =
        runtime.block_on(async move { LocationTask::spawn(provider, timeout).wait().await });

    let mut view = ViewState::new();
    view.select_tab(tab);
    if let Some(id) = select {
        if let Err(err) = view.select_venue(&catalog, &id) {
            warn!(error = %err, "selection ignored");
        }
    }

    let screen = presenter::present(&catalog, &view, &location, &config.map);
    if json {
        println!("{}", serde_json::to_string_pretty(&screen)?);
    } else {
        print!("{}", render_text(&screen));
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
