//! Read-only view models for drawing the current state.

use std::fmt;

use serde::Serialize;

use crate::{AppState, DisplayCountry};

/// Maximum number of languages shown on a card.
pub const MAX_CARD_LANGUAGES: usize = 3;

/// One result card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CountryCard {
    pub name: String,
    pub capital: String,
    /// At most [`MAX_CARD_LANGUAGES`] entries.
    pub languages: Vec<String>,
}

impl From<&DisplayCountry> for CountryCard {
    fn from(country: &DisplayCountry) -> Self {
        Self {
            name: country.name.clone(),
            capital: country.capital.clone(),
            languages: country
                .languages
                .iter()
                .take(MAX_CARD_LANGUAGES)
                .cloned()
                .collect(),
        }
    }
}

impl fmt::Display for CountryCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (capital: {}; languages: {})",
            self.name,
            self.capital,
            self.languages.join(", ")
        )
    }
}

/// Builds cards sorted alphabetically by name.
///
/// Names are compared with diacritics stripped and case folded, so
/// "Åland Islands" sits next to "Albania"; the raw name breaks ties.
pub fn cards(sample: &[DisplayCountry]) -> Vec<CountryCard> {
    let mut cards: Vec<CountryCard> = sample.iter().map(CountryCard::from).collect();
    cards.sort_by_cached_key(|card| (sort_key(&card.name), card.name.clone()));
    cards
}

fn sort_key(name: &str) -> String {
    deunicode::deunicode(name).to_lowercase()
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct View {
    pub loading: bool,
    /// Text for the error banner, if the fetch failed.
    pub error: Option<String>,
    /// Value to show in the count input.
    pub input: String,
    /// Validation feedback under the input.
    pub status: String,
    pub cards: Vec<CountryCard>,
}

pub fn view(state: &AppState) -> View {
    View {
        loading: state.is_loading(),
        error: state.error().map(str::to_owned),
        input: state.input_text(),
        status: format!("Displaying: {}", state.input_text()),
        cards: cards(state.sample()),
    }
}
