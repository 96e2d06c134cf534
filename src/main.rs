//! Site Router CLI
//!
//! Inspect the route table and exercise navigation from the command line.
//!
//! ```text
//! site-router routes
//! site-router resolve / /about /nonexistent
//! site-router --base /site/ navigate /site/ /site/links
//! site-router href blog
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use site_router::config::ConfigOverrides;
use site_router::lifecycle::start;
use site_router::navigation::Navigator;
use site_router::routing::{Preset, RouteMatch, RouteSummary, RouteTarget};

#[derive(Parser)]
#[command(name = "site-router")]
#[command(about = "Route table resolver for the site", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in route table used when the config declares no routes
    #[arg(short, long)]
    preset: Option<Preset>,

    /// Base path prefix (overrides config and BASE_URL)
    #[arg(short, long)]
    base: Option<String>,

    /// Directory holding view files
    #[arg(long)]
    views: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the route table
    Routes,
    /// Resolve locations one step, without loading views
    Resolve {
        #[arg(required = true)]
        locations: Vec<String>,
    },
    /// Navigate to locations in order, loading their views
    Navigate {
        #[arg(required = true)]
        locations: Vec<String>,

        /// Print the view body
        #[arg(long)]
        body: bool,
    },
    /// Print the URL of a named route
    Href { name: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        preset: cli.preset,
        base: cli.base,
        views_dir: cli.views,
    };
    let navigator = start(cli.config.as_deref(), overrides)?;

    match cli.command {
        Commands::Routes => print_routes(&navigator, cli.json)?,
        Commands::Resolve { locations } => print_resolutions(&navigator, &locations, cli.json)?,
        Commands::Navigate { locations, body } => {
            navigate_all(&navigator, &locations, cli.json, body).await?
        }
        Commands::Href { name } => println!("{}", navigator.router().href(&name)?),
    }

    Ok(())
}

fn print_routes(navigator: &Navigator, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let routes = navigator.router().table().routes();
    if as_json {
        let summaries: Vec<RouteSummary> = routes.iter().map(RouteSummary::from).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for route in routes {
        let target = match &route.target {
            RouteTarget::Redirect { to } => format!("redirect {}", to),
            RouteTarget::Lazy { component } => format!("view {}", component),
        };
        println!("{:<12} {:<12} {}", route.path.to_string(), route.name, target);
    }
    Ok(())
}

fn print_resolutions(
    navigator: &Navigator,
    locations: &[String],
    as_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let matches: Vec<RouteMatch> = locations
        .iter()
        .map(|location| navigator.router().resolve(location))
        .collect();
    if as_json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    for (location, matched) in locations.iter().zip(&matches) {
        match matched {
            RouteMatch::Redirect { route, to, .. } => {
                println!("{} -> redirect ({}) to {}", location, route, to)
            }
            RouteMatch::View {
                route,
                component,
                fallback,
                ..
            } => {
                let note = if *fallback { " [not found]" } else { "" };
                println!("{} -> view {} ({}){}", location, component, route, note)
            }
            RouteMatch::NoMatch { path } => println!("{} -> no route matches {}", location, path),
        }
    }
    Ok(())
}

async fn navigate_all(
    navigator: &Navigator,
    locations: &[String],
    as_json: bool,
    with_body: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut failures = 0;
    let mut results = Vec::with_capacity(locations.len());

    for location in locations {
        match navigator.navigate(location).await {
            Ok(navigation) => {
                if !as_json {
                    println!(
                        "{} -> {} {} ({}) \"{}\"",
                        location,
                        navigation.status(),
                        navigation.path,
                        navigation.route,
                        navigation.view.title
                    );
                    if with_body {
                        println!("{}", navigation.view.body);
                    }
                }
                results.push(json!({ "location": location, "navigation": navigation }));
            }
            Err(e) => {
                failures += 1;
                if !as_json {
                    eprintln!("{} -> error: {}", location, e);
                }
                results.push(json!({ "location": location, "error": e.to_string() }));
            }
        }
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }
    if failures > 0 {
        return Err(format!("{} of {} navigations failed", failures, locations.len()).into());
    }
    Ok(())
}
