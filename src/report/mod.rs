//! Projection of an extracted meal plan onto the terminal.
//!
//! Everything here is stateless string layout: diet and category filtering,
//! column alignment, color, and the markdown table variant. No parsing
//! happens past this point.

mod money;

use chrono::NaiveDate;
use crossterm::style::{style, Color, Stylize};
use phf::Set;

use crate::lexicon::{self, Language, PriceTier};
use crate::parse::{Category, Meal};
use money::Eur;

/// Which meals to drop based on their allergen lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DietFilter {
    #[default]
    None,
    Vegetarian,
    Vegan,
}

impl DietFilter {
    fn label(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Vegetarian => Some("vegetarian"),
            Self::Vegan => Some("vegan"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Markdown,
}

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub diet: DietFilter,
    pub hidden_categories: Vec<String>,
    pub show_all_allergens: bool,
    pub show_additives: bool,
    pub color: bool,
    pub format: OutputFormat,
}

/// The yellow banner line printed ahead of the report.
pub fn heading(
    canteen: &str,
    date: NaiveDate,
    language: Language,
    options: &ReportOptions,
) -> String {
    let filter = options
        .diet
        .label()
        .map(|label| format!(" [{label}]"))
        .unwrap_or_default();
    let line = format!("Mensa {canteen} – {date}{filter} [{}]", language.code());
    paint(&line, Color::Yellow, options.color)
}

/// Lay out the extracted categories as configured. Returns the empty string
/// when every meal was filtered away.
pub fn render(categories: &[Category], language: Language, options: &ReportOptions) -> String {
    let kept: Vec<&Category> = categories
        .iter()
        .filter(|category| {
            !options
                .hidden_categories
                .iter()
                .any(|hidden| hidden == category.title())
        })
        .collect();
    match options.format {
        OutputFormat::Text => render_text(&kept, language, options),
        OutputFormat::Markdown => render_markdown(&kept, language, options),
    }
}

fn render_text(kept: &[&Category], language: Language, options: &ReportOptions) -> String {
    // column width over all kept categories, including those the diet
    // filter will empty out
    let width = kept
        .iter()
        .map(|category| category.title().chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for category in kept {
        let meals: Vec<&Meal> = category
            .meals()
            .iter()
            .filter(|meal| !removed_by_diet(meal, options.diet, language))
            .collect();
        if meals.is_empty() {
            continue;
        }
        let padded = format!("{:<1$}", category.title(), width + 1);
        for (index, meal) in meals.iter().enumerate() {
            if index == 0 {
                out.push_str(&paint(&padded, Color::Green, options.color));
            } else {
                out.push_str(&" ".repeat(width + 1));
            }
            out.push_str(&meal_line(meal, language, options));
            out.push('\n');
        }
    }
    out
}

fn render_markdown(kept: &[&Category], language: Language, options: &ReportOptions) -> String {
    let mut out = String::new();
    if options.show_additives {
        out.push_str("| Category | Meal | Price | Allergens | Additives |\n");
        out.push_str("| --- | --- | --- | --- | --- |\n");
    } else {
        out.push_str("| Category | Meal | Price | Allergens |\n");
        out.push_str("| --- | --- | --- | --- |\n");
    }
    for category in kept {
        for meal in category.meals() {
            if removed_by_diet(meal, options.diet, language) {
                continue;
            }
            let price = meal
                .price(PriceTier::Student)
                .map(|cents| Eur::from_cents(cents).to_string())
                .unwrap_or_default();
            out.push_str(&format!(
                "| {} | {} | {} | {} |",
                category.title(),
                meal.title(),
                price,
                shown_allergens(meal, language, options).join(", "),
            ));
            if options.show_additives {
                out.push_str(&format!(" {} |", meal.additives().join(", ")));
            }
            out.push('\n');
        }
    }
    out
}

fn meal_line(meal: &Meal, language: Language, options: &ReportOptions) -> String {
    let mut line = paint(meal.title(), Color::Blue, options.color);
    if let Some(cents) = meal.price(PriceTier::Student) {
        line.push(' ');
        line.push_str(&paint(
            &format!("({})", Eur::from_cents(cents)),
            Color::Cyan,
            options.color,
        ));
    }
    let allergens = shown_allergens(meal, language, options);
    if !allergens.is_empty() {
        line.push(' ');
        line.push_str(&paint(
            &format!("[{}]", allergens.join(", ")),
            Color::Red,
            options.color,
        ));
    }
    if options.show_additives && !meal.additives().is_empty() {
        line.push(' ');
        line.push_str(&paint(
            &format!("{{{}}}", meal.additives().join(", ")),
            Color::DarkGrey,
            options.color,
        ));
    }
    line
}

fn removed_by_diet(meal: &Meal, diet: DietFilter, language: Language) -> bool {
    let groups: Vec<&Set<&str>> = match diet {
        DietFilter::None => return false,
        DietFilter::Vegetarian => vec![lexicon::meat_allergens(language)],
        DietFilter::Vegan => vec![
            lexicon::meat_allergens(language),
            lexicon::ovo_lacto_allergens(language),
        ],
    };
    meal.allergens()
        .iter()
        .any(|allergen| groups.iter().any(|group| group.contains(allergen.as_str())))
}

fn shown_allergens<'a>(
    meal: &'a Meal,
    language: Language,
    options: &ReportOptions,
) -> Vec<&'a str> {
    meal.allergens()
        .iter()
        .map(String::as_str)
        .filter(|allergen| {
            options.show_all_allergens || lexicon::is_interesting_allergen(language, allergen)
        })
        .collect()
}

fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        style(text).with(color).to_string()
    } else {
        text.to_owned()
    }
}
