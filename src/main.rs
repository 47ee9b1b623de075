#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod error;
mod fetch;
mod lexicon;
mod parse;
mod report;

use std::process;

use chrono::{Local, NaiveDate};
use clap::Parser;
use log::LevelFilter;

use crate::error::{Error, Result};
use crate::lexicon::Language;
use crate::report::{DietFilter, OutputFormat, ReportOptions};

/// Query the meal plan of a University of Bonn canteen.
#[derive(Parser, Debug)]
#[command(name = "mensa", version, about)]
struct Cli {
    /// Canteen to query
    #[arg(long, default_value = "CAMPO")]
    mensa: String,

    /// Date to query (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Language of the meal plan (de or en)
    #[arg(long, default_value = "de")]
    lang: String,

    /// Only show vegan options
    #[arg(long, conflicts_with = "vegetarian")]
    vegan: bool,

    /// Only show vegetarian options
    #[arg(long)]
    vegetarian: bool,

    /// Categories to hide
    #[arg(long, num_args = 0.., default_values_t = ["Buffet".to_owned(), "Dessert".to_owned()])]
    filter_categories: Vec<String>,

    /// Show every allergen, not only the diet-relevant ones
    #[arg(long)]
    show_all_allergens: bool,

    /// Show additives
    #[arg(long)]
    show_additives: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Render the plan as a markdown table
    #[arg(long)]
    markdown: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn report_options(&self) -> ReportOptions {
        let diet = if self.vegan {
            DietFilter::Vegan
        } else if self.vegetarian {
            DietFilter::Vegetarian
        } else {
            DietFilter::None
        };
        ReportOptions {
            diet,
            hidden_categories: self.filter_categories.clone(),
            show_all_allergens: self.show_all_allergens,
            show_additives: self.show_additives,
            color: !self.no_color && !self.markdown,
            format: if self.markdown {
                OutputFormat::Markdown
            } else {
                OutputFormat::Text
            },
        }
    }
}

fn main() {
    let cli = Cli::parse();
    pretty_env_logger::formatted_builder()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .init();

    if let Err(error) = run(&cli) {
        eprintln!("{error}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let language = Language::from_code(&cli.lang).ok_or_else(|| {
        Error::Config(format!("unknown language {:?} (expected de or en)", cli.lang))
    })?;
    let canteen_id = fetch::canteen_id(&cli.mensa).ok_or_else(|| {
        Error::Config(format!(
            "unknown canteen {:?} (expected one of: {})",
            cli.mensa,
            fetch::canteen_names().join(", ")
        ))
    })?;
    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let options = cli.report_options();

    println!("{}", report::heading(&cli.mensa, date, language, &options));

    let client = fetch::make_client()?;
    let body = match fetch::fetch_meal_plan(&client, date, canteen_id, language) {
        Ok(body) => body,
        Err(error) => {
            // not fatal: an unreachable upstream looks just like a day
            // without meals further down
            log::warn!("meal plan request failed: {error}");
            String::new()
        }
    };

    let plan = parse::extract_meal_plan(&body, language)?;
    for note in &plan.notes {
        println!("{note}");
    }
    if plan.categories.is_empty() {
        log::warn!("no meal categories found – the query may have failed (closed? invalid date?)");
        return Ok(());
    }

    print!("{}", report::render(&plan.categories, language, &options));
    Ok(())
}
