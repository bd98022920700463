use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileShareRange};
use super::models::AppConfig;
use crate::cli::{ConfigArgs, MixArgs};
use crate::error::{CliError, Result};
use crate::utils::parser;
use feedmix::core::composition::FeedMixComposition;
use feedmix::core::feeds::FeedTable;
use feedmix::engine::config::{SearchConfigBuilder, ShareRange};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};

/// Merges defaults, the config file, `--set` overrides and CLI flags, in
/// increasing order of precedence.
pub fn build_config(args: &ConfigArgs, mix: Option<&MixArgs>) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match &args.config {
        Some(config_path) => FileConfig::from_file(config_path)?,
        None => FileConfig::default(),
    };
    let file_config = apply_set_values(file_config, &args.set_values)?;

    let feed_table = load_feed_table(args.feed_table.clone().or(file_config.feed_table))?;

    let ration_file = file_config.ration.unwrap_or_default();
    let mut composition = FeedMixComposition::new(
        ration_file
            .grass_silage
            .unwrap_or(defaults.grass_silage_share),
        ration_file
            .maize_silage
            .unwrap_or(defaults.maize_silage_share),
        ration_file.hay.unwrap_or(defaults.hay_share),
    );
    if let Some(mix) = mix {
        composition = merge_mix(composition, mix)?;
    }

    let search_file = file_config.search.unwrap_or_default();
    let search = SearchConfigBuilder::new()
        .grass_silage(merge_range(
            search_file.grass_silage,
            defaults.grass_silage_range,
        ))
        .maize_silage(merge_range(
            search_file.maize_silage,
            defaults.maize_silage_range,
        ))
        .max_hay_share(search_file.max_hay_share.unwrap_or(defaults.max_hay_share))
        .min_true_protein(
            search_file
                .min_true_protein
                .unwrap_or(defaults.min_true_protein),
        )
        .min_crude_fiber(
            search_file
                .min_crude_fiber
                .unwrap_or(defaults.min_crude_fiber),
        )
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    debug!("Merged composition: {}", composition);
    debug!("Merged search config: {:?}", search);

    Ok(AppConfig {
        feed_table,
        composition,
        search,
    })
}

fn load_feed_table(path: Option<PathBuf>) -> Result<FeedTable> {
    match path {
        Some(path) => {
            info!("Loading feed table from {:?}", path);
            Ok(FeedTable::load(&path)?)
        }
        None => Ok(FeedTable::default()),
    }
}

fn merge_mix(base: FeedMixComposition, mix: &MixArgs) -> Result<FeedMixComposition> {
    let mut composition = match &mix.mix {
        Some(text) => parser::parse_mix(text).map_err(|e| CliError::Argument(e.to_string()))?,
        None => base,
    };
    for text in &mix.shares {
        let (feed, share) =
            parser::parse_share(text).map_err(|e| CliError::Argument(e.to_string()))?;
        composition.set_share(feed, share);
    }
    if let Some(share) = mix.grass_silage {
        composition.grass_silage = share;
    }
    if let Some(share) = mix.maize_silage {
        composition.maize_silage = share;
    }
    if let Some(share) = mix.hay {
        composition.hay = share;
    }
    Ok(composition)
}

fn merge_range(file_val: Option<FileShareRange>, default: ShareRange) -> ShareRange {
    let file_val = file_val.unwrap_or_default();
    ShareRange::new(
        file_val.start.unwrap_or(default.start),
        file_val.end.unwrap_or(default.end),
        file_val.step.unwrap_or(default.step),
    )
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "feed-table" => config.feed_table = Some(PathBuf::from(value)),
            "ration.grass-silage" => {
                config
                    .ration
                    .get_or_insert_with(Default::default)
                    .grass_silage = Some(parse_value(key, value, "integer")?);
            }
            "ration.maize-silage" => {
                config
                    .ration
                    .get_or_insert_with(Default::default)
                    .maize_silage = Some(parse_value(key, value, "integer")?);
            }
            "ration.hay" => {
                config.ration.get_or_insert_with(Default::default).hay =
                    Some(parse_value(key, value, "integer")?);
            }
            "search.max-hay-share" => {
                config
                    .search
                    .get_or_insert_with(Default::default)
                    .max_hay_share = Some(parse_value(key, value, "integer")?);
            }
            "search.min-true-protein" => {
                config
                    .search
                    .get_or_insert_with(Default::default)
                    .min_true_protein = Some(parse_value(key, value, "float")?);
            }
            "search.min-crude-fiber" => {
                config
                    .search
                    .get_or_insert_with(Default::default)
                    .min_crude_fiber = Some(parse_value(key, value, "float")?);
            }
            _ => {
                let Some((range_key, field)) = key.rsplit_once('.') else {
                    return Err(unsupported_key(key));
                };
                let search = config.search.get_or_insert_with(Default::default);
                let range = match range_key {
                    "search.grass-silage" => &mut search.grass_silage,
                    "search.maize-silage" => &mut search.maize_silage,
                    _ => return Err(unsupported_key(key)),
                }
                .get_or_insert_with(Default::default);
                let parsed = Some(parse_value(key, value, "integer")?);
                match field {
                    "start" => range.start = parsed,
                    "end" => range.end = parsed,
                    "step" => range.step = parsed,
                    _ => return Err(unsupported_key(key)),
                }
            }
        }
    }
    Ok(config)
}

fn unsupported_key(key: &str) -> CliError {
    CliError::Config(format!("Unsupported configuration key for --set: '{}'", key))
}
