//! Olympics CLI
//!
//! Command-line interface over the Olympic participation fixture:
//! - Print the home summary
//! - Show one country's detail
//! - Resolve a dashboard path
//! - Render the medal pie chart to SVG
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use olympics::chart::{render_chart, ChartArea, SvgSurface};
use olympics::config::{generate_default_config, Config, LoggingConfig};
use olympics::source::source_from_location;
use olympics::{
    DetailDeriver, DetailStatus, DetailViewModel, HomeViewModel, OlympicStore, Route, StoreState,
};

#[derive(Parser)]
#[command(name = "olympics")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Olympic Games participation dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: searched in standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Fixture file path or URL, overriding the config
    #[arg(long, global = true)]
    pub fixture: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Country count, Games count and medals per country
    Summary,

    /// Metrics for one country
    Country {
        /// Country id
        id: String,
    },

    /// Resolve a dashboard path (e.g. "/", "/country/3")
    View {
        path: String,
    },

    /// Render the medal pie chart as SVG
    Render {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Chart width in pixels (default: from config)
        #[arg(long)]
        width: Option<f64>,
        /// Chart height in pixels (default: from config)
        #[arg(long)]
        height: Option<f64>,
        /// Viewport width used to pick callout spacing (default: chart width)
        #[arg(long)]
        viewport: Option<f64>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(fixture) = &cli.fixture {
        config.fixture.location = fixture.clone();
    }

    init_logging(&config.logging);
    tracing::debug!("Olympics v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Summary => {
            let state = load_state(&config).await?;
            print_home(&state, cli.format)?;
        }

        Commands::Country { id } => {
            let state = load_state(&config).await?;
            print_country(Some(id), state, cli.format)?;
        }

        Commands::View { path } => match Route::parse(&path) {
            Route::Home => {
                let state = load_state(&config).await?;
                print_home(&state, cli.format)?;
            }
            Route::Country(id) => {
                let state = load_state(&config).await?;
                print_country(Some(id), state, cli.format)?;
            }
            Route::NotFound => {
                eprintln!("Page not found: {}", path);
                std::process::exit(1);
            }
        },

        Commands::Render {
            output,
            width,
            height,
            viewport,
        } => {
            let state = load_state(&config).await?;
            let Some(home) = olympics::derive_home(&state) else {
                eprintln!("Cannot render chart: fixture unavailable");
                std::process::exit(1);
            };

            let width = width.unwrap_or(config.chart.width);
            let height = height.unwrap_or(config.chart.height);

            let mut options = config.chart.options.clone();
            options.callouts = options.callouts.for_viewport(viewport.unwrap_or(width));

            let mut surface = SvgSurface::new(width, height).with_background("#ffffff");
            let layout = render_chart(
                &mut surface,
                &home,
                &ChartArea::of_size(width, height),
                &options,
            );
            tracing::info!(slices = layout.slices.len(), "Chart rendered");

            let document = surface.finish();
            match output {
                Some(path) => {
                    std::fs::write(&path, &document)
                        .with_context(|| format!("writing {:?}", path))?;
                    println!("Chart written to {:?}", path);
                }
                None => print!("{}", document),
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("olympics={}", config.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Fetch the fixture once into a fresh store
async fn load_state(config: &Config) -> anyhow::Result<StoreState> {
    let source = source_from_location(&config.fixture.location, config.fixture.timeout())?;
    let store = OlympicStore::new();
    Ok(store.load(source.as_ref()).await)
}

fn print_home(state: &StoreState, format: OutputFormat) -> anyhow::Result<()> {
    let Some(home) = olympics::derive_home(state) else {
        eprintln!("Olympic data unavailable (see log for the fetch error)");
        std::process::exit(1);
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&home)?),
        OutputFormat::Table => print_home_table(&home),
    }
    Ok(())
}

fn print_home_table(home: &HomeViewModel) {
    println!("Number of JOs:       {}", home.total_participations);
    println!("Number of countries: {}", home.country_count);
    println!();

    if home.medal_series.is_empty() {
        println!("No countries in the fixture.");
        return;
    }

    println!("{:<6} {:<24} {:>8}", "ID", "Country", "Medals");
    println!("{}", "-".repeat(40));
    for slice in &home.medal_series {
        println!("{:<6} {:<24} {:>8}", slice.country_id, slice.label, slice.value);
    }
}

fn print_country(id: Option<String>, state: StoreState, format: OutputFormat) -> anyhow::Result<()> {
    let mut deriver = DetailDeriver::default();
    deriver.set_route(id);
    let detail = deriver.set_store(state);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        print_country_table(&detail);
    }

    if detail.status != DetailStatus::Ready {
        std::process::exit(1);
    }
    Ok(())
}

fn print_country_table(detail: &DetailViewModel) {
    match detail.status {
        DetailStatus::Loading => println!("Loading..."),
        DetailStatus::Error => {
            eprintln!("Olympic data unavailable (see log for the fetch error)")
        }
        DetailStatus::NotFound => eprintln!("Country not found"),
        DetailStatus::Ready => {
            println!("{}", detail.country_name);
            println!();
            println!("Number of entries:  {}", detail.metrics.entries);
            println!("Total medals:       {}", detail.metrics.medals);
            println!("Total athletes:     {}", detail.metrics.athletes);

            if !detail.timeline.is_empty() {
                println!();
                println!("{:<6} {:<20} {:>8} {:>10}", "Year", "City", "Medals", "Athletes");
                println!("{}", "-".repeat(48));
                for edition in &detail.timeline {
                    println!(
                        "{:<6} {:<20} {:>8} {:>10}",
                        edition.year, edition.city, edition.medals, edition.athletes
                    );
                }
            }
        }
    }
}
