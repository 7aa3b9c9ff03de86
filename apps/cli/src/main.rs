use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use client_core::{
    config::normalize_server_url, load_settings, HttpRecommender, RecommendError, RecommenderApi,
    ResultsPhase, Session, Submission,
};
use shared::{domain::FilterGroup, protocol::RecommendationResponse};
use tracing::info;

/// Ask the recommendation server for dishes matching your preferences.
#[derive(Parser, Debug)]
#[command(name = "dish-cli", version)]
struct Args {
    /// Overrides the configured recommender url.
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long, default_value = "")]
    min_price: String,
    #[arg(long, default_value = "")]
    max_price: String,
    #[arg(long)]
    calories: Option<String>,
    #[arg(long)]
    meal: Option<String>,
    #[arg(long)]
    cuisine: Option<String>,
    #[arg(long)]
    spice: Option<String>,
    #[arg(long)]
    prep: Option<String>,
    /// Category to toggle; repeat for several.
    #[arg(long = "category")]
    categories: Vec<String>,
    #[arg(long)]
    vegetarian_only: bool,
    /// Also write the result cards as HTML to this file.
    #[arg(long)]
    html: Option<PathBuf>,
    /// Print the request body and exit without contacting the server.
    #[arg(long)]
    dry_run: bool,
    /// Also print the server reply as JSON before the cards.
    #[arg(long)]
    json: bool,
}

impl Args {
    fn group_choices(&self) -> [(FilterGroup, Option<&String>); 5] {
        [
            (FilterGroup::Calories, self.calories.as_ref()),
            (FilterGroup::Meal, self.meal.as_ref()),
            (FilterGroup::Cuisine, self.cuisine.as_ref()),
            (FilterGroup::Spice, self.spice.as_ref()),
            (FilterGroup::Prep, self.prep.as_ref()),
        ]
    }
}

fn apply_args(session: &mut Session, args: &Args) {
    for (group, value) in args.group_choices() {
        if let Some(value) = value {
            session.selection.select(group, value.as_str());
        }
    }
    for category in &args.categories {
        session.selection.toggle_category(category);
    }
    session.form.min_price = args.min_price.clone();
    session.form.max_price = args.max_price.clone();
    session.form.vegetarian_only = args.vegetarian_only;
}

/// Pretty JSON of a successful reply; failures print nothing here.
fn reply_json(outcome: &Result<RecommendationResponse, RecommendError>) -> Result<Option<String>> {
    match outcome {
        Ok(response) => Ok(Some(serde_json::to_string_pretty(response)?)),
        Err(_) => Ok(None),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(url) = &args.server_url {
        settings.server_url = normalize_server_url(url);
    }
    info!(server_url = %settings.server_url, "using recommendation server");

    let mut session = Session::new(settings.server_url.clone());
    apply_args(&mut session, &args);

    if args.dry_run {
        let request = session.form.build_request(&session.selection);
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    let api = HttpRecommender::from_settings(&settings)
        .with_context(|| format!("cannot build client for '{}'", settings.server_url))?;
    let Submission { ticket, request } = session.begin_submission();
    let outcome = api.recommend(&request).await;
    if args.json {
        if let Some(raw) = reply_json(&outcome)? {
            println!("{raw}");
        }
    }
    let completion = session.complete(ticket, outcome);
    info!(?completion, "submission finished");

    if let Some(notice) = session.take_notice() {
        eprintln!("{notice}");
        bail!("recommendation request failed");
    }

    match session.results() {
        ResultsPhase::Loaded(grid) => {
            println!("{}\n", grid.summary());
            for card in grid.cards() {
                println!("{card}");
            }
            if let Some(path) = &args.html {
                fs::write(path, grid.to_html())
                    .with_context(|| format!("failed to write '{}'", path.display()))?;
                info!(path = %path.display(), "wrote result cards");
            }
        }
        ResultsPhase::Empty => {
            println!("No dishes found. Try relaxing your preferences.");
        }
        ResultsPhase::Loading => bail!("submission did not complete"),
    }

    Ok(())
}
