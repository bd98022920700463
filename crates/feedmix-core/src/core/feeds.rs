use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// One of the three roughage components a ration is blended from.
///
/// The set is closed: every composition, blend and table in this crate is
/// indexed by exactly these three feeds, in the order of [`Feed::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feed {
    /// Grass silage ("kuilgras").
    GrassSilage,
    /// Maize silage ("snijmaïs").
    MaizeSilage,
    /// Hay ("hooi").
    Hay,
}

impl Feed {
    /// All feeds in canonical order. Blends are always summed in this order.
    pub const ALL: [Feed; 3] = [Feed::GrassSilage, Feed::MaizeSilage, Feed::Hay];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Feed::GrassSilage => 0,
            Feed::MaizeSilage => 1,
            Feed::Hay => 2,
        }
    }

    /// The key used for this feed in TOML files and on the command line.
    pub const fn key(self) -> &'static str {
        match self {
            Feed::GrassSilage => "grass-silage",
            Feed::MaizeSilage => "maize-silage",
            Feed::Hay => "hay",
        }
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Feed::GrassSilage => "grass silage",
            Feed::MaizeSilage => "maize silage",
            Feed::Hay => "hay",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Unknown feed '{0}'. Expected one of: grass-silage, maize-silage, hay.")]
pub struct FeedParseError(pub String);

impl FromStr for Feed {
    type Err = FeedParseError;

    /// Parses a feed name, case-insensitively. Both the English names and the
    /// Dutch names used in CVB tables are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grass-silage" | "grass_silage" | "grass silage" | "grass" | "kuilgras" => {
                Ok(Feed::GrassSilage)
            }
            "maize-silage" | "maize_silage" | "maize silage" | "maize" | "snijmais"
            | "snijmaïs" => Ok(Feed::MaizeSilage),
            "hay" | "hooi" => Ok(Feed::Hay),
            _ => Err(FeedParseError(s.to_string())),
        }
    }
}

/// Nutrient content of a single feed, in g/kg dry matter.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FeedProperties {
    /// Crude protein (RE).
    pub crude_protein: f64,
    /// True protein (WE), taken as the DVE value.
    pub true_protein: f64,
    /// Crude fiber (RC).
    pub crude_fiber: f64,
}

impl FeedProperties {
    pub const fn new(crude_protein: f64, true_protein: f64, crude_fiber: f64) -> Self {
        Self {
            crude_protein,
            true_protein,
            crude_fiber,
        }
    }

    fn fields(&self) -> [(&'static str, f64); 3] {
        [
            ("crude-protein", self.crude_protein),
            ("true-protein", self.true_protein),
            ("crude-fiber", self.crude_fiber),
        ]
    }
}

#[derive(Debug, Error)]
pub enum FeedTableError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Feed '{feed}' has a non-positive {field} value: {value}")]
    NonPositive {
        feed: Feed,
        field: &'static str,
        value: f64,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct FeedTableFile {
    grass_silage: FeedProperties,
    maize_silage: FeedProperties,
    hay: FeedProperties,
}

/// Nutrient properties for each of the three feeds.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedTable {
    properties: [FeedProperties; 3],
}

impl FeedTable {
    /// CVB reference values per kg dry matter, with DVE as true protein.
    pub const CVB_REFERENCE: FeedTable = FeedTable {
        properties: [
            FeedProperties::new(160.0, 96.0, 250.0),
            FeedProperties::new(80.0, 53.0, 220.0),
            FeedProperties::new(170.0, 92.0, 300.0),
        ],
    };

    /// Builds a table from explicit values, rejecting any non-positive entry.
    pub fn new(
        grass_silage: FeedProperties,
        maize_silage: FeedProperties,
        hay: FeedProperties,
    ) -> Result<Self, FeedTableError> {
        let table = Self {
            properties: [grass_silage, maize_silage, hay],
        };
        table.validate()?;
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self, FeedTableError> {
        let content = std::fs::read_to_string(path).map_err(|e| FeedTableError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: FeedTableFile = toml::from_str(&content).map_err(|e| FeedTableError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::new(file.grass_silage, file.maize_silage, file.hay)
    }

    #[inline]
    pub fn get(&self, feed: Feed) -> &FeedProperties {
        &self.properties[feed.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feed, &FeedProperties)> {
        Feed::ALL.into_iter().map(move |feed| (feed, self.get(feed)))
    }

    fn validate(&self) -> Result<(), FeedTableError> {
        for (feed, props) in self.iter() {
            for (field, value) in props.fields() {
                if !(value.is_finite() && value > 0.0) {
                    return Err(FeedTableError::NonPositive { feed, field, value });
                }
            }
        }
        Ok(())
    }
}

impl Default for FeedTable {
    fn default() -> Self {
        Self::CVB_REFERENCE
    }
}
