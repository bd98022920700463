use feedmix::core::composition::FeedMixComposition;
use feedmix::core::feeds::{Feed, FeedParseError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid mix '{0}'. Expected 'grass/maize/hay' percentages (e.g., '70/15/15').")]
    InvalidMixFormat(String),

    #[error("Invalid share '{value}' for {component} in mix '{mix}'. Expected a whole, non-negative percentage.")]
    InvalidShare {
        component: &'static str,
        value: String,
        mix: String,
    },

    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidKeyValue(String),

    #[error("Invalid --share format: '{0}'. Expected FEED=PERCENT (e.g., 'hooi=20').")]
    InvalidShareFormat(String),

    #[error(transparent)]
    UnknownFeed(#[from] FeedParseError),
}

const MIX_COMPONENTS: [&str; 3] = ["grass silage", "maize silage", "hay"];

/// Parses a mix written as `G/M/H`, e.g. `70/15/15`.
pub fn parse_mix(s: &str) -> Result<FeedMixComposition, ParseError> {
    let parts: Vec<&str> = s.split('/').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ParseError::InvalidMixFormat(s.to_string()));
    }

    let mut shares = [0u32; 3];
    for (i, part) in parts.iter().enumerate() {
        shares[i] = part.parse().map_err(|_| ParseError::InvalidShare {
            component: MIX_COMPONENTS[i],
            value: part.to_string(),
            mix: s.to_string(),
        })?;
    }
    Ok(FeedMixComposition::new(shares[0], shares[1], shares[2]))
}

/// Parses a single share written as `FEED=PERCENT`, e.g. `hay=20` or `kuilgras=70`.
pub fn parse_share(s: &str) -> Result<(Feed, u32), ParseError> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidShareFormat(s.to_string()))?;
    let feed: Feed = name.parse()?;
    let share = value.trim().parse().map_err(|_| ParseError::InvalidShare {
        component: MIX_COMPONENTS[feed.index()],
        value: value.trim().to_string(),
        mix: s.to_string(),
    })?;
    Ok((feed, share))
}

/// Splits a `KEY=VALUE` override at the first `=`.
pub fn parse_key_value(s: &str) -> Result<(&str, &str), ParseError> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(ParseError::InvalidKeyValue(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mix_reads_three_shares_in_feed_order() {
        assert_eq!(parse_mix("70/15/15"), Ok(FeedMixComposition::new(70, 15, 15)));
        assert_eq!(parse_mix(" 50 / 30 / 20 "), Ok(FeedMixComposition::new(50, 30, 20)));
        assert_eq!(parse_mix("0/0/0"), Ok(FeedMixComposition::ZERO));
    }

    #[test]
    fn parse_mix_rejects_wrong_number_of_parts() {
        assert_eq!(
            parse_mix("70/30"),
            Err(ParseError::InvalidMixFormat("70/30".to_string()))
        );
        assert!(matches!(
            parse_mix("25/25/25/25"),
            Err(ParseError::InvalidMixFormat(_))
        ));
    }

    #[test]
    fn parse_mix_rejects_negative_and_fractional_shares() {
        assert_eq!(
            parse_mix("70/-15/15"),
            Err(ParseError::InvalidShare {
                component: "maize silage",
                value: "-15".to_string(),
                mix: "70/-15/15".to_string(),
            })
        );
        assert!(matches!(
            parse_mix("70/15/15.5"),
            Err(ParseError::InvalidShare {
                component: "hay",
                ..
            })
        ));
    }

    #[test]
    fn parse_share_accepts_feed_keys_and_dutch_names() {
        assert_eq!(parse_share("hay=20"), Ok((Feed::Hay, 20)));
        assert_eq!(parse_share("Kuilgras = 70"), Ok((Feed::GrassSilage, 70)));
        assert_eq!(parse_share("snijmais=15"), Ok((Feed::MaizeSilage, 15)));
    }

    #[test]
    fn parse_share_rejects_unknown_feeds_and_bad_values() {
        assert_eq!(
            parse_share("soja=10"),
            Err(ParseError::UnknownFeed(FeedParseError("soja".to_string())))
        );
        assert!(matches!(
            parse_share("hooi=-5"),
            Err(ParseError::InvalidShare {
                component: "hay",
                ..
            })
        ));
        assert_eq!(
            parse_share("hay"),
            Err(ParseError::InvalidShareFormat("hay".to_string()))
        );
    }

    #[test]
    fn parse_key_value_splits_at_first_equals_sign() {
        assert_eq!(
            parse_key_value("search.max-hay-share=50"),
            Ok(("search.max-hay-share", "50"))
        );
        assert_eq!(parse_key_value("a=b=c"), Ok(("a", "b=c")));
    }

    #[test]
    fn parse_key_value_requires_a_key_and_separator() {
        assert!(parse_key_value("no-separator").is_err());
        assert!(parse_key_value("=5").is_err());
    }
}
