use feedmix::core::nutrition::{MIN_CRUDE_FIBER, MIN_TRUE_PROTEIN};
use feedmix::engine::config::ShareRange;

pub struct DefaultsConfig {
    pub grass_silage_share: u32,
    pub maize_silage_share: u32,
    pub hay_share: u32,
    pub grass_silage_range: ShareRange,
    pub maize_silage_range: ShareRange,
    pub max_hay_share: u32,
    pub min_true_protein: f64,
    pub min_crude_fiber: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            grass_silage_share: 50,
            maize_silage_share: 30,
            hay_share: 20,
            grass_silage_range: ShareRange::new(40, 80, 5),
            maize_silage_range: ShareRange::new(0, 50, 5),
            max_hay_share: 60,
            min_true_protein: MIN_TRUE_PROTEIN,
            min_crude_fiber: MIN_CRUDE_FIBER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedmix::core::composition::FeedMixComposition;
    use feedmix::engine::config::SearchConfig;

    #[test]
    fn defaults_agree_with_core_defaults() {
        let defaults = DefaultsConfig::default();
        let search = SearchConfig::default();
        assert_eq!(
            FeedMixComposition::new(
                defaults.grass_silage_share,
                defaults.maize_silage_share,
                defaults.hay_share
            ),
            FeedMixComposition::default()
        );
        assert_eq!(defaults.grass_silage_range, search.grass_silage);
        assert_eq!(defaults.maize_silage_range, search.maize_silage);
        assert_eq!(defaults.max_hay_share, search.max_hay_share);
        assert_eq!(defaults.min_true_protein, search.min_true_protein);
        assert_eq!(defaults.min_crude_fiber, search.min_crude_fiber);
    }
}
