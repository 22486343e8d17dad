use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductChoice {
    /// Odor-absorbing bead made from the extract.
    #[default]
    ScentBead,
    /// Mini brick pressed from the leaf residue.
    BioBrick,
    Both,
}

impl ProductChoice {
    pub fn includes_scent_bead(self) -> bool {
        matches!(self, ProductChoice::ScentBead | ProductChoice::Both)
    }

    pub fn includes_bio_brick(self) -> bool {
        matches!(self, ProductChoice::BioBrick | ProductChoice::Both)
    }
}

impl FromStr for ProductChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "scent-bead" | "bead" => Ok(ProductChoice::ScentBead),
            "bio-brick" | "brick" => Ok(ProductChoice::BioBrick),
            "both" => Ok(ProductChoice::Both),
            _ => Err(AppError::UnknownProduct(s.to_string())),
        }
    }
}

impl fmt::Display for ProductChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductChoice::ScentBead => write!(f, "scent-bead"),
            ProductChoice::BioBrick => write!(f, "bio-brick"),
            ProductChoice::Both => write!(f, "both"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("scent-bead".parse::<ProductChoice>().unwrap(), ProductChoice::ScentBead);
        assert_eq!("Bead".parse::<ProductChoice>().unwrap(), ProductChoice::ScentBead);
        assert_eq!("bio_brick".parse::<ProductChoice>().unwrap(), ProductChoice::BioBrick);
        assert_eq!("BRICK".parse::<ProductChoice>().unwrap(), ProductChoice::BioBrick);
        assert_eq!("both".parse::<ProductChoice>().unwrap(), ProductChoice::Both);
    }

    #[test]
    fn unknown_product_is_an_error() {
        assert!(matches!(
            "candle".parse::<ProductChoice>(),
            Err(AppError::UnknownProduct(name)) if name == "candle"
        ));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for choice in [ProductChoice::ScentBead, ProductChoice::BioBrick, ProductChoice::Both] {
            assert_eq!(choice.to_string().parse::<ProductChoice>().unwrap(), choice);
        }
    }

    #[test]
    fn both_includes_each_product() {
        assert!(ProductChoice::Both.includes_scent_bead());
        assert!(ProductChoice::Both.includes_bio_brick());
        assert!(!ProductChoice::ScentBead.includes_bio_brick());
        assert!(!ProductChoice::BioBrick.includes_scent_bead());
    }
}
