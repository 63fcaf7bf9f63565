use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietPreference {
    #[serde(rename = "veg")]
    Veg,
    #[serde(rename = "non-veg")]
    NonVeg,
    #[serde(rename = "vegan")]
    Vegan,
}

impl std::fmt::Display for DietPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DietPreference::Veg => write!(f, "veg"),
            DietPreference::NonVeg => write!(f, "non-veg"),
            DietPreference::Vegan => write!(f, "vegan"),
        }
    }
}

impl std::str::FromStr for DietPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "veg" => Ok(DietPreference::Veg),
            "non-veg" => Ok(DietPreference::NonVeg),
            "vegan" => Ok(DietPreference::Vegan),
            _ => Err(format!("Invalid diet preference: {}", s)),
        }
    }
}

/// Lunch slot an employee intends to eat in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LunchTiming {
    #[serde(rename = "12-1")]
    Noon,
    #[serde(rename = "1-2")]
    One,
    #[serde(rename = "2-3")]
    Two,
    #[serde(rename = "3-4")]
    Three,
}

impl std::fmt::Display for LunchTiming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LunchTiming::Noon => write!(f, "12-1"),
            LunchTiming::One => write!(f, "1-2"),
            LunchTiming::Two => write!(f, "2-3"),
            LunchTiming::Three => write!(f, "3-4"),
        }
    }
}

impl std::str::FromStr for LunchTiming {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "12-1" => Ok(LunchTiming::Noon),
            "1-2" => Ok(LunchTiming::One),
            "2-3" => Ok(LunchTiming::Two),
            "3-4" => Ok(LunchTiming::Three),
            _ => Err(format!("Invalid lunch timing: {}", s)),
        }
    }
}
