use feedmix::core::composition::FeedMixComposition;
use feedmix::core::feeds::FeedTable;
use feedmix::engine::config::SearchConfig;

/// Fully merged configuration handed to the commands.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub feed_table: FeedTable,
    pub composition: FeedMixComposition,
    pub search: SearchConfig,
}
