use crate::RawCountry;

/// Placeholder shown for any field the upstream record lacks.
pub const NOT_AVAILABLE: &str = "N/A";

/// Fully populated country record drawn into a sample.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayCountry {
    pub name: String,
    pub capital: String,
    pub languages: Vec<String>,
}

impl From<&RawCountry> for DisplayCountry {
    fn from(raw: &RawCountry) -> Self {
        let name = raw
            .common_name()
            .map(str::to_owned)
            .unwrap_or_else(|| NOT_AVAILABLE.to_owned());
        let capital = raw
            .capital
            .as_ref()
            .and_then(|capitals| capitals.first())
            .cloned()
            .unwrap_or_else(|| NOT_AVAILABLE.to_owned());
        let languages = match raw.languages.as_deref() {
            Some(pairs) if !pairs.is_empty() => {
                pairs.iter().map(|(_, name)| name.clone()).collect()
            }
            _ => vec![NOT_AVAILABLE.to_owned()],
        };

        Self {
            name,
            capital,
            languages,
        }
    }
}

/// Full set of countries fetched for a session. Read-only once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pool {
    countries: Vec<RawCountry>,
}

impl Pool {
    /// Wraps a decoded country list.
    pub fn new(countries: Vec<RawCountry>) -> Self {
        Self { countries }
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn as_slice(&self) -> &[RawCountry] {
        &self.countries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RawCountry> {
        self.countries.iter()
    }
}

impl FromIterator<RawCountry> for Pool {
    fn from_iter<I: IntoIterator<Item = RawCountry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::{wire::CountryName, DisplayCountry, RawCountry};

    #[test]
    fn display_country_takes_first_capital_and_all_languages() {
        let raw = RawCountry {
            name: Some(CountryName {
                common: Some("South Africa".to_owned()),
            }),
            capital: Some(vec![
                "Pretoria".to_owned(),
                "Bloemfontein".to_owned(),
                "Cape Town".to_owned(),
            ]),
            languages: Some(vec![
                ("afr".to_owned(), "Afrikaans".to_owned()),
                ("eng".to_owned(), "English".to_owned()),
                ("nbl".to_owned(), "Southern Ndebele".to_owned()),
                ("nso".to_owned(), "Northern Sotho".to_owned()),
            ]),
            cca3: None,
        };

        let display = DisplayCountry::from(&raw);
        assert_eq!(display.name, "South Africa");
        assert_eq!(display.capital, "Pretoria");
        assert_eq!(display.languages.len(), 4);
    }

    #[test]
    fn missing_fields_become_placeholders() {
        let raw = RawCountry {
            name: Some(CountryName { common: None }),
            capital: Some(Vec::new()),
            languages: Some(Vec::new()),
            cca3: None,
        };

        let display = DisplayCountry::from(&raw);
        assert_eq!(display.name, "N/A");
        assert_eq!(display.capital, "N/A");
        assert_eq!(display.languages, vec!["N/A".to_owned()]);

        let display = DisplayCountry::from(&RawCountry::default());
        assert_eq!(display.capital, "N/A");
        assert_eq!(display.languages, vec!["N/A".to_owned()]);
    }
}
