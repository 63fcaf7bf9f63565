use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WasteCategory {
    Food,
    Water,
}

impl WasteCategory {
    pub fn unit(&self) -> &'static str {
        match self {
            WasteCategory::Food => "kg",
            WasteCategory::Water => "L",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WasteCategory::Food => "food",
            WasteCategory::Water => "water",
        }
    }
}

impl fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WasteCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "food" => Ok(WasteCategory::Food),
            "water" => Ok(WasteCategory::Water),
            other => Err(format!("unknown waste category: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pick_unit_from_category() {
        assert_eq!(WasteCategory::Food.unit(), "kg");
        assert_eq!(WasteCategory::Water.unit(), "L");
    }

    #[test]
    fn should_parse_lowercase_names() {
        assert_eq!("water".parse::<WasteCategory>(), Ok(WasteCategory::Water));
        assert!("Water".parse::<WasteCategory>().is_err());
    }
}
