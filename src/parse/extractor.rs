use scraper::Html;

use super::error::{Error, Result};
use super::events::{markup_events, MarkupEvent};
use super::menu::{Category, Meal, MealPlan};
use super::price::price_cents;
use crate::lexicon::{self, Language, PriceTier, Section};

/// Tags that carry structure when they appear without attributes. Everything
/// else, and every attributed tag, drops the parser into [`Mode::Ignore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    H2,
    H5,
    Strong,
    P,
    Th,
    Td,
    Br,
}

impl Tag {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "h2" => Some(Self::H2),
            "h5" => Some(Self::H5),
            "strong" => Some(Self::Strong),
            "p" => Some(Self::P),
            "th" => Some(Self::Th),
            "td" => Some(Self::Td),
            "br" => Some(Self::Br),
            _ => None,
        }
    }
}

/// What the next text event means.
///
/// The meal plan markup has no explicit nesting; the only way to know whether
/// a text node is a category title, a meal title, an allergen entry or a
/// price is to remember which tag introduced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Init,
    Preamble,
    Ignore,
    NewCategory,
    NewMeal,
    SectionLabel,
    CollectingAllergens,
    CollectingAdditives,
    PriceLabel,
    AwaitPrice(PriceTier),
}

/// The extraction state machine. One instance per parse; nothing survives
/// across invocations.
#[derive(Debug)]
pub struct MenuExtractor {
    language: Language,
    mode: Mode,
    current_category: Option<Category>,
    current_meal: Option<Meal>,
    last_tag: Option<Tag>,
    categories: Vec<Category>,
    notes: Vec<String>,
}

impl MenuExtractor {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            mode: Mode::Init,
            current_category: None,
            current_meal: None,
            last_tag: None,
            categories: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn process(&mut self, event: MarkupEvent<'_>) -> Result<()> {
        match event {
            MarkupEvent::Start { tag, attributed } => {
                self.start_tag(tag, attributed);
                Ok(())
            }
            MarkupEvent::Text(text) => self.text(text),
        }
    }

    /// Seal whatever is still open and hand over the result.
    pub fn finish(mut self) -> MealPlan {
        self.seal_category();
        MealPlan {
            categories: self.categories,
            notes: self.notes,
        }
    }

    fn start_tag(&mut self, name: &str, attributed: bool) {
        let tag = if attributed {
            None
        } else {
            Tag::from_name(name)
        };
        let Some(tag) = tag else {
            self.mode = Mode::Ignore;
            return;
        };

        self.last_tag = Some(tag);
        match tag {
            Tag::H2 => {
                self.seal_category();
                self.mode = Mode::NewCategory;
            }
            Tag::H5 => {
                let category = self.current_category.get_or_insert_with(Category::unnamed);
                if let Some(meal) = self.current_meal.take() {
                    category.push_meal(meal);
                }
                self.mode = Mode::NewMeal;
            }
            Tag::Strong => self.mode = Mode::SectionLabel,
            Tag::P => {
                // paragraphs only matter as the free-text banner ahead of
                // the first heading
                if self.current_category.is_none() && self.current_meal.is_none() {
                    self.mode = Mode::Preamble;
                }
            }
            Tag::Th => self.mode = Mode::PriceLabel,
            // price values are read while still in the tier's await mode,
            // and line breaks merely separate list entries
            Tag::Td | Tag::Br => {}
        }
    }

    fn text(&mut self, raw: &str) -> Result<()> {
        let text = raw.trim();
        if text.is_empty() {
            return Ok(());
        }
        match self.mode {
            Mode::Ignore => {}
            Mode::Init | Mode::Preamble => self.notes.push(text.to_owned()),
            Mode::NewCategory => {
                log::debug!("creating category {text:?}");
                self.current_category = Some(Category::new(text));
            }
            Mode::NewMeal => {
                log::debug!("creating meal {text:?}");
                self.current_meal = Some(Meal::new(text));
            }
            Mode::SectionLabel => {
                self.mode = match lexicon::section(self.language, text) {
                    Some(Section::Allergens) => Mode::CollectingAllergens,
                    Some(Section::Additives) => Mode::CollectingAdditives,
                    None => return Err(Error::UnknownSectionLabel(text.to_owned())),
                };
            }
            Mode::CollectingAllergens => self.current_meal_mut(text)?.push_allergen(text),
            Mode::CollectingAdditives => self.current_meal_mut(text)?.push_additive(text),
            Mode::PriceLabel => {
                self.mode = match lexicon::price_tier(self.language, text) {
                    Some(tier) => Mode::AwaitPrice(tier),
                    None => return Err(Error::UnknownPriceLabel(text.to_owned())),
                };
            }
            Mode::AwaitPrice(tier) => {
                if self.last_tag != Some(Tag::Td) {
                    return Err(Error::PriceOutsideCell(text.to_owned()));
                }
                self.current_meal_mut(text)?.set_price(tier, price_cents(text));
            }
        }
        Ok(())
    }

    fn seal_category(&mut self) {
        if let Some(mut category) = self.current_category.take() {
            if let Some(meal) = self.current_meal.take() {
                category.push_meal(meal);
            }
            self.categories.push(category);
        }
    }

    fn current_meal_mut(&mut self, text: &str) -> Result<&mut Meal> {
        self.current_meal
            .as_mut()
            .ok_or_else(|| Error::MissingMeal(text.to_owned()))
    }
}

/// Parse a meal plan page end to end.
pub fn extract_meal_plan(html: &str, language: Language) -> Result<MealPlan> {
    let document = Html::parse_document(html);
    let mut extractor = MenuExtractor::new(language);
    for event in markup_events(&document) {
        extractor.process(event)?;
    }
    Ok(extractor.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn titles(plan: &MealPlan) -> Vec<&str> {
        plan.categories.iter().map(Category::title).collect()
    }

    #[test]
    fn extracts_example_page() {
        let html = fs::read_to_string("./src/parse/html_examples/meal_plan_de.html").unwrap();
        let plan = extract_meal_plan(&html, Language::De).expect("the example page should parse");

        assert_eq!(plan.notes, ["Gültig am 31.08.2026"]);
        assert_eq!(titles(&plan), ["Suppen", "Hauptgerichte"]);

        let soup = &plan.categories[0].meals()[0];
        assert_eq!(soup.title(), "Tomatensuppe");
        assert_eq!(soup.allergens(), ["Milch (46)", "Sellerie (49)"]);
        assert_eq!(soup.additives(), ["Geschmacksverstärker (5)"]);
        assert_eq!(soup.price(PriceTier::Student), Some(250));
        assert_eq!(soup.price(PriceTier::Staff), Some(350));
        assert_eq!(soup.price(PriceTier::Guest), Some(480));

        let mains = &plan.categories[1];
        assert_eq!(
            mains.meals().iter().map(Meal::title).collect::<Vec<_>>(),
            ["Rinderroulade", "Gemüsepfanne"]
        );
        assert_eq!(mains.meals()[0].allergens(), ["Rindfleisch (R)", "Senf (47)"]);
        assert_eq!(mains.meals()[0].price(PriceTier::Student), Some(420));
        assert_eq!(mains.meals()[1].price(PriceTier::Student), Some(310));
        assert_eq!(mains.meals()[1].price(PriceTier::Guest), None);
    }

    #[test]
    fn category_and_meal_order_follows_the_document() {
        let html = "<h2>A</h2><h5>a1</h5><h5>a2</h5><h2>B</h2><h5>b1</h5>";
        let plan = extract_meal_plan(html, Language::De).unwrap();
        assert_eq!(titles(&plan), ["A", "B"]);
        assert_eq!(
            plan.categories[0]
                .meals()
                .iter()
                .map(Meal::title)
                .collect::<Vec<_>>(),
            ["a1", "a2"]
        );
        assert_eq!(plan.categories[1].meals()[0].title(), "b1");
    }

    #[test]
    fn meal_before_any_heading_gets_a_placeholder_category() {
        let html = "<h5>Streuobst</h5><h5>Apfel</h5><h2>Echt</h2><h5>e1</h5>";
        let plan = extract_meal_plan(html, Language::De).unwrap();
        assert_eq!(titles(&plan), ["Unnamed", "Echt"]);
        assert_eq!(
            plan.categories[0]
                .meals()
                .iter()
                .map(Meal::title)
                .collect::<Vec<_>>(),
            ["Streuobst", "Apfel"]
        );
    }

    #[test]
    fn english_lexicon_end_to_end() {
        let html = "<h2>Soups</h2><h5>Tomato Soup</h5>\
            <p><strong>Allergens</strong><br>milk (46)</p>\
            <table><tr><th>Student</th><td>2,50€</td></tr></table>";
        let plan = extract_meal_plan(html, Language::En).unwrap();
        assert_eq!(titles(&plan), ["Soups"]);
        let meal = &plan.categories[0].meals()[0];
        assert_eq!(meal.title(), "Tomato Soup");
        assert_eq!(meal.allergens(), ["milk (46)"]);
        assert_eq!(meal.price(PriceTier::Student), Some(250));
    }

    #[test]
    fn allergen_entries_keep_document_order() {
        let html = "<h2>Soups</h2><h5>Chowder</h5>\
            <p><strong>Allergens</strong><br>milk (46)<br>fish (43)</p>";
        let plan = extract_meal_plan(html, Language::En).unwrap();
        assert_eq!(
            plan.categories[0].meals()[0].allergens(),
            ["milk (46)", "fish (43)"]
        );
    }

    #[test]
    fn attributed_headings_are_ignored() {
        let html = r#"<h2 class="nav">Not a category</h2><h2>Real</h2><h5>Meal</h5>"#;
        let plan = extract_meal_plan(html, Language::De).unwrap();
        assert_eq!(titles(&plan), ["Real"]);
    }

    #[test]
    fn unknown_section_label_is_fatal() {
        let html = "<h2>Soups</h2><h5>Broth</h5><p><strong>Nutrients</strong><br>x</p>";
        let error = extract_meal_plan(html, Language::En).unwrap_err();
        assert_eq!(error, Error::UnknownSectionLabel("Nutrients".to_owned()));
    }

    #[test]
    fn unknown_price_label_is_fatal() {
        let html = "<h2>Soups</h2><h5>Broth</h5>\
            <table><tr><th>Chef</th><td>9,99€</td></tr></table>";
        let error = extract_meal_plan(html, Language::En).unwrap_err();
        assert_eq!(error, Error::UnknownPriceLabel("Chef".to_owned()));
    }

    #[test]
    fn price_text_outside_a_cell_is_fatal() {
        let html = "<h2>Soups</h2><h5>Broth</h5>\
            <table><tr><th>Student</th></tr></table><br>1,00€";
        let error = extract_meal_plan(html, Language::En).unwrap_err();
        assert_eq!(error, Error::PriceOutsideCell("1,00€".to_owned()));
    }

    #[test]
    fn banner_text_lands_in_notes_not_categories() {
        let html = "<p>Die Mensa bleibt am Feiertag geschlossen.</p>";
        let plan = extract_meal_plan(html, Language::De).unwrap();
        assert!(plan.categories.is_empty());
        assert_eq!(plan.notes, ["Die Mensa bleibt am Feiertag geschlossen."]);
    }

    #[test]
    fn empty_document_yields_empty_plan() {
        let plan = extract_meal_plan("", Language::De).unwrap();
        assert!(plan.categories.is_empty());
        assert!(plan.notes.is_empty());
    }
}
