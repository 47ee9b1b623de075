use std::fmt::Display;

use rusty_money::{iso, Money};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eur(Money<'static, iso::Currency>);

impl Eur {
    pub fn from_cents(cents: u32) -> Self {
        Self(Money::from_minor(i64::from(cents), iso::EUR))
    }
}

impl Display for Eur {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eur_from_cents() {
        let eur = Eur::from_cents(250);
        assert_eq!(eur.to_string(), "€2,50");
    }

    #[test]
    fn test_eur_whole_amount() {
        let eur = Eur::from_cents(1200);
        assert_eq!(eur.to_string(), "€12,00");
    }
}
