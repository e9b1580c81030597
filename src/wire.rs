use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Country record as returned by the REST Countries API.
///
/// Every field tolerates absence; normalization happens when a sample is
/// drawn, not at decode time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCountry {
    #[serde(default)]
    pub name: Option<CountryName>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    /// Language code → display name, in upstream order.
    #[serde(
        default,
        deserialize_with = "deserialize_languages",
        serialize_with = "serialize_languages",
        skip_serializing_if = "Option::is_none"
    )]
    pub languages: Option<Vec<(String, String)>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cca3: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    #[serde(default)]
    pub common: Option<String>,
}

impl RawCountry {
    /// Common name, if present.
    pub fn common_name(&self) -> Option<&str> {
        self.name.as_ref()?.common.as_deref()
    }
}

/// Decodes the `languages` object keeping key order.
///
/// Non-string values are dropped rather than failing the whole record.
fn deserialize_languages<'de, D>(deserializer: D) -> Result<Option<Vec<(String, String)>>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = Option::<serde_json::Map<String, serde_json::Value>>::deserialize(deserializer)?;
    Ok(map.map(|map| {
        map.into_iter()
            .filter_map(|(code, name)| match name {
                serde_json::Value::String(name) => Some((code, name)),
                _ => None,
            })
            .collect()
    }))
}

fn serialize_languages<S>(
    languages: &Option<Vec<(String, String)>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match languages {
        Some(pairs) => serializer.collect_map(pairs.iter().map(|(code, name)| (code, name))),
        None => serializer.serialize_none(),
    }
}
