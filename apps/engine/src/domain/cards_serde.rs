//! Serde support for [`Card`]: a compact token that round-trips the deck id.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::cards_parsing::{format_card, parse_card};
use crate::domain::cards_types::Card;

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_card(*self))
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_card(&s).map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}
