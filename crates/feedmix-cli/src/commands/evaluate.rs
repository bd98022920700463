use crate::cli::{ConfigArgs, EvaluateArgs};
use crate::config;
use crate::error::{CliError, Result};
use crate::report;
use feedmix::core::composition::InvalidCompositionError;
use feedmix::workflows;
use std::io::{self, Write};
use tracing::{debug, info};

pub fn run(args: &EvaluateArgs, config_args: &ConfigArgs) -> Result<()> {
    execute(args, config_args, &mut io::stdout().lock())
}

fn execute(args: &EvaluateArgs, config_args: &ConfigArgs, out: &mut impl Write) -> Result<()> {
    let app_config = config::build_config(config_args, Some(&args.mix))?;
    let composition = app_config.composition;

    if composition.is_zero() {
        debug!("Evaluation requested for an all-zero mix.");
        writeln!(out, "{}", report::ZERO_MIX_WARNING)?;
        return Err(CliError::Composition(InvalidCompositionError));
    }

    info!("Evaluating ration: {}", composition);
    let assessment = workflows::evaluate::run(&composition, &app_config.feed_table)?;
    report::write_assessment(out, &assessment)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::MixArgs;

    fn args_for(mix: &str) -> EvaluateArgs {
        EvaluateArgs {
            mix: MixArgs {
                mix: Some(mix.to_string()),
                ..MixArgs::default()
            },
        }
    }

    #[test]
    fn prints_the_assessment_of_the_requested_mix() {
        let mut out = Vec::new();
        execute(&args_for("70/15/15"), &ConfigArgs::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Ration: 70% grass silage, 15% maize silage, 15% hay"));
        assert!(text.contains("149.5 g/kg DM"));
        assert!(text.contains("Health check"));
    }

    #[test]
    fn zero_mix_stops_after_the_warning() {
        let mut out = Vec::new();
        let result = execute(&args_for("0/0/0"), &ConfigArgs::default(), &mut out);
        assert!(matches!(result, Err(CliError::Composition(_))));
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.trim_end(), report::ZERO_MIX_WARNING);
    }
}
