use super::feeds::Feed;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[error("Invalid composition: all feed shares are zero, at least one feed needs a share above 0%")]
pub struct InvalidCompositionError;

/// Shares of the three feeds in a ration, conceptually percentages.
///
/// The shares need not add up to 100: every computation works on
/// `share / total`, so only the proportions matter. A composition whose shares
/// are all zero is a representable value (the optimizer uses it as its
/// "nothing found" marker) but cannot be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedMixComposition {
    pub grass_silage: u32,
    pub maize_silage: u32,
    pub hay: u32,
}

impl FeedMixComposition {
    /// The recommended 70/15/15 mix.
    pub const REFERENCE: FeedMixComposition = FeedMixComposition::new(70, 15, 15);

    /// The all-zero composition.
    pub const ZERO: FeedMixComposition = FeedMixComposition::new(0, 0, 0);

    pub const fn new(grass_silage: u32, maize_silage: u32, hay: u32) -> Self {
        Self {
            grass_silage,
            maize_silage,
            hay,
        }
    }

    #[inline]
    pub fn share(&self, feed: Feed) -> u32 {
        match feed {
            Feed::GrassSilage => self.grass_silage,
            Feed::MaizeSilage => self.maize_silage,
            Feed::Hay => self.hay,
        }
    }

    pub fn set_share(&mut self, feed: Feed, share: u32) {
        match feed {
            Feed::GrassSilage => self.grass_silage = share,
            Feed::MaizeSilage => self.maize_silage = share,
            Feed::Hay => self.hay = share,
        }
    }

    /// Sum of the three shares, widened so that it can never overflow.
    #[inline]
    pub fn total(&self) -> u64 {
        u64::from(self.grass_silage) + u64::from(self.maize_silage) + u64::from(self.hay)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }

    /// Normalized weight of each feed, in [`Feed::ALL`] order.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCompositionError`] when the total is zero.
    pub fn fractions(&self) -> Result<[f64; 3], InvalidCompositionError> {
        let total = self.total();
        if total == 0 {
            return Err(InvalidCompositionError);
        }
        let total = total as f64;
        Ok(Feed::ALL.map(|feed| f64::from(self.share(feed)) / total))
    }
}

impl Default for FeedMixComposition {
    /// The initial composition offered before any user input: 50/30/20.
    fn default() -> Self {
        Self::new(50, 30, 20)
    }
}

impl fmt::Display for FeedMixComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% {}, {}% {}, {}% {}",
            self.grass_silage,
            Feed::GrassSilage,
            self.maize_silage,
            Feed::MaizeSilage,
            self.hay,
            Feed::Hay
        )
    }
}
