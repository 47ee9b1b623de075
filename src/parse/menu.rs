use crate::lexicon::PriceTier;

/// One dish on the meal plan.
///
/// Allergens and additives keep document order and are not deduplicated;
/// the upstream occasionally repeats entries and we render what it says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    title: String,
    allergens: Vec<String>,
    additives: Vec<String>,
    student_price: Option<u32>,
    staff_price: Option<u32>,
    guest_price: Option<u32>,
}

impl Meal {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_owned(),
            allergens: Vec::new(),
            additives: Vec::new(),
            student_price: None,
            staff_price: None,
            guest_price: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn allergens(&self) -> &[String] {
        &self.allergens
    }

    pub fn additives(&self) -> &[String] {
        &self.additives
    }

    pub fn push_allergen(&mut self, allergen: &str) {
        self.allergens.push(allergen.to_owned());
    }

    pub fn push_additive(&mut self, additive: &str) {
        self.additives.push(additive.to_owned());
    }

    /// A repeated tier silently overwrites; the upstream never repeats one
    /// in practice and we do not guard against it.
    pub fn set_price(&mut self, tier: PriceTier, cents: u32) {
        match tier {
            PriceTier::Student => self.student_price = Some(cents),
            PriceTier::Staff => self.staff_price = Some(cents),
            PriceTier::Guest => self.guest_price = Some(cents),
        }
    }

    pub fn price(&self, tier: PriceTier) -> Option<u32> {
        match tier {
            PriceTier::Student => self.student_price,
            PriceTier::Staff => self.staff_price,
            PriceTier::Guest => self.guest_price,
        }
    }
}

/// A named group of meals as the upstream renders it ("Suppen", "Buffet", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    title: String,
    meals: Vec<Meal>,
}

impl Category {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_owned(),
            meals: Vec::new(),
        }
    }

    /// Placeholder for the rare page that lists meals before any heading.
    pub fn unnamed() -> Self {
        Self::new("Unnamed")
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn push_meal(&mut self, meal: Meal) {
        self.meals.push(meal);
    }
}

/// Everything one parse run extracts from a meal plan page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealPlan {
    pub categories: Vec<Category>,
    /// Free-text banner lines the page shows outside any category, e.g.
    /// holiday notices. Printed ahead of the report.
    pub notes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_start_unset_and_overwrite_per_tier() {
        let mut meal = Meal::new("Tomatensuppe");
        assert_eq!(meal.price(PriceTier::Student), None);
        meal.set_price(PriceTier::Student, 250);
        meal.set_price(PriceTier::Guest, 450);
        assert_eq!(meal.price(PriceTier::Student), Some(250));
        assert_eq!(meal.price(PriceTier::Staff), None);
        assert_eq!(meal.price(PriceTier::Guest), Some(450));
        meal.set_price(PriceTier::Student, 300);
        assert_eq!(meal.price(PriceTier::Student), Some(300));
    }

    #[test]
    fn allergens_keep_duplicates_and_order() {
        let mut meal = Meal::new("Eintopf");
        meal.push_allergen("Milch (46)");
        meal.push_allergen("Eier (42)");
        meal.push_allergen("Milch (46)");
        assert_eq!(
            meal.allergens(),
            ["Milch (46)", "Eier (42)", "Milch (46)"]
        );
    }
}
