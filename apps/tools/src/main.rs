use std::path::PathBuf;

use anyhow::{Context, Result};
use browser_core::{filter, pick_random, FormControls, InputControls, Presenter, ResultsPane};
use catalog::{
    generate::{
        generate_movies, write_catalog, write_catalog_csv, DEFAULT_COUNT, DEFAULT_CSV_OUTPUT,
        DEFAULT_OUTPUT,
    },
    load_into, Catalog, CatalogSource,
};
use clap::{Args, Parser, Subcommand};
use shared::{domain::Movie, protocol::SearchParams};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "movie-tools", about = "Generate and query movie catalogs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a sample catalog of random movies
    Generate {
        #[arg(long, default_value_t = DEFAULT_COUNT)]
        count: usize,
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
        /// Where to write the CSV copy of the catalog
        #[arg(long, default_value = DEFAULT_CSV_OUTPUT)]
        csv: PathBuf,
    },
    /// Filter a catalog by genre, minimum rating and year
    Search {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long)]
        genre: Option<String>,
        #[arg(long)]
        min_rating: Option<String>,
        #[arg(long)]
        year: Option<String>,
    },
    /// Pick one movie at random
    Surprise {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Path or http(s) URL of the catalog
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    catalog: String,
    /// Print the rendered result cards instead of one line per movie
    #[arg(long)]
    html: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate { count, output, csv } => {
            let movies = generate_movies(count, &mut rand::thread_rng());
            write_catalog(&output, &movies).await?;
            write_catalog_csv(&csv, &movies).await?;
            info!(count, output = %output.display(), csv = %csv.display(), "catalog generated");
            println!(
                "wrote {} movies to {} and {}",
                movies.len(),
                output.display(),
                csv.display()
            );
        }
        Command::Search {
            source,
            genre,
            min_rating,
            year,
        } => {
            let controls = FormControls::new(SearchParams {
                genre,
                min_rating,
                year,
            });
            let catalog = open_catalog(&source.catalog).await?;
            print!("{}", search_output(catalog, &controls, source.html));
        }
        Command::Surprise { source } => {
            let catalog = open_catalog(&source.catalog).await?;
            print!("{}", surprise_output(catalog, source.html));
        }
    }

    Ok(())
}

async fn open_catalog(raw: &str) -> Result<Catalog> {
    let catalog = Catalog::new();
    let source = CatalogSource::parse(raw);
    load_into(&catalog, &source)
        .await
        .with_context(|| format!("could not load catalog from '{source}'"))?;
    Ok(catalog)
}

/// Output of `search`. Empty when the catalog has nothing to search.
fn search_output(catalog: Catalog, controls: &FormControls, html: bool) -> String {
    if catalog.is_empty() {
        return String::new();
    }
    if html {
        let mut pane = ResultsPane::default();
        Presenter::new(catalog).search(controls, &mut pane);
        format!("{}\n", pane.into_content())
    } else {
        format_lines(&filter(catalog.movies(), &controls.criteria()))
    }
}

/// Output of `surprise`. Empty when the catalog has nothing to pick from.
fn surprise_output(catalog: Catalog, html: bool) -> String {
    if catalog.is_empty() {
        return String::new();
    }
    if html {
        let mut pane = ResultsPane::default();
        Presenter::new(catalog).surprise(&mut pane);
        format!("{}\n", pane.into_content())
    } else {
        format_lines(&pick_random(catalog.movies()))
    }
}

fn format_lines(movies: &[&Movie]) -> String {
    if movies.is_empty() {
        return format!("{}\n", browser_core::EMPTY_STATE_MESSAGE);
    }
    movies
        .iter()
        .map(|movie| format!("{}\n", format_line(movie)))
        .collect()
}

fn format_line(movie: &Movie) -> String {
    let rating = movie.rating.map(|r| r.to_string()).unwrap_or_default();
    let year = movie.year.map(|y| y.to_string()).unwrap_or_default();
    format!(
        "{} ({year}) [{}] ⭐ {rating}: {}",
        movie.title, movie.genre, movie.description
    )
}
