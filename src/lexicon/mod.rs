//! Per-language lookup tables for the meal plan markup.
//!
//! The upstream renders every structural label (section headers, price tier
//! headers) as plain text in the requested language, so the parser needs an
//! exact-match lexicon per language. Matching is case-sensitive on trimmed
//! text; anything the lexicon does not know is a hard format error upstream,
//! never a soft miss.

use phf::{phf_set, Set};

/// Languages the upstream meal plan endpoint can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    De,
    En,
}

impl Language {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "de" => Some(Self::De),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::De => "de",
            Self::En => "en",
        }
    }

    /// Numeric id the upstream expects in the `L` form field.
    pub fn query_id(self) -> &'static str {
        match self {
            Self::De => "0",
            Self::En => "1",
        }
    }
}

/// Section headers that switch the parser into list-collection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Allergens,
    Additives,
}

/// The three price columns of a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTier {
    Student,
    Staff,
    Guest,
}

/// Resolve a `<strong>` header to a section, e.g. `"Allergene"` for German.
pub fn section(language: Language, label: &str) -> Option<Section> {
    match (language, label) {
        (Language::De, "Allergene") | (Language::En, "Allergens") => Some(Section::Allergens),
        (Language::De, "Zusatzstoffe") | (Language::En, "Additives") => Some(Section::Additives),
        _ => None,
    }
}

/// Resolve a `<th>` header to a price tier, e.g. `"Stud."` for German.
pub fn price_tier(language: Language, label: &str) -> Option<PriceTier> {
    match (language, label) {
        (Language::De, "Stud.") | (Language::En, "Student") => Some(PriceTier::Student),
        (Language::De, "Bed.") | (Language::En, "Staff") => Some(PriceTier::Staff),
        (Language::De, "Gast") | (Language::En, "Guest") => Some(PriceTier::Guest),
        _ => None,
    }
}

static MEAT_DE: Set<&'static str> = phf_set! {
    "Krebstiere (41)",
    "Fisch (43)",
    "Weichtiere (53)",
    "Kalbfleisch (K)",
    "Schweinefleisch (S)",
    "Rindfleisch (R)",
    "Lammfleisch (L)",
    "Geflügel (G)",
    "Fisch (F)",
};

static MEAT_EN: Set<&'static str> = phf_set! {
    "crustaceans (41)",
    "fish (43)",
    "molluscs (53)",
    "veal (K)",
    "pork (S)",
    "beef (R)",
    "lamb (L)",
    "poultry (G)",
    "fish (F)",
};

static OVO_LACTO_DE: Set<&'static str> = phf_set! {
    "Eier (42)",
    "Milch (46)",
};

static OVO_LACTO_EN: Set<&'static str> = phf_set! {
    "eggs (42)",
    "milk (46)",
};

// Extension point for allergens worth flagging that are neither meat- nor
// egg/dairy-derived. Nothing qualifies right now.
static OTHER_DE: Set<&'static str> = phf_set! {};
static OTHER_EN: Set<&'static str> = phf_set! {};

/// Allergens that indicate a meal is not vegetarian.
pub fn meat_allergens(language: Language) -> &'static Set<&'static str> {
    match language {
        Language::De => &MEAT_DE,
        Language::En => &MEAT_EN,
    }
}

/// Allergens that are fine for vegetarians but not for vegans.
pub fn ovo_lacto_allergens(language: Language) -> &'static Set<&'static str> {
    match language {
        Language::De => &OVO_LACTO_DE,
        Language::En => &OVO_LACTO_EN,
    }
}

pub fn other_allergens(language: Language) -> &'static Set<&'static str> {
    match language {
        Language::De => &OTHER_DE,
        Language::En => &OTHER_EN,
    }
}

/// Is this allergen worth showing in the default (non `--show-all-allergens`)
/// report, i.e. a member of any named group?
pub fn is_interesting_allergen(language: Language, allergen: &str) -> bool {
    meat_allergens(language).contains(allergen)
        || ovo_lacto_allergens(language).contains(allergen)
        || other_allergens(language).contains(allergen)
}
