use feedmix::core::composition::FeedMixComposition;
use feedmix::core::feeds::FeedTable;
use feedmix::core::nutrition::{RationAssessment, Severity};
use feedmix::engine::optimizer::OptimizationOutcome;
use std::io::{self, Write};

pub const ZERO_MIX_WARNING: &str = "⚠ Give at least one feed a share above 0%.";

fn severity_marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Good => "✔",
        Severity::Info => "ℹ",
        Severity::Warning => "⚠",
        Severity::Critical => "✖",
    }
}

/// Results block for one ration: nutrient levels, nitrogen balance and health check.
pub fn write_assessment(out: &mut impl Write, assessment: &RationAssessment) -> io::Result<()> {
    let profile = &assessment.profile;
    let balance = &assessment.balance;
    let verdict = assessment.verdict;

    writeln!(out, "Ration: {}", assessment.composition)?;
    writeln!(out)?;
    writeln!(out, "Results")?;

    let concentrations = [
        ("Crude protein in ration:", profile.crude_protein),
        ("True protein (DVE):", profile.true_protein),
    ];
    for (label, value) in concentrations {
        writeln!(out, "  {:<31}{:.1} g/kg DM", label, value)?;
    }

    let utilized_label = format!(
        "Nitrogen utilized ({:.1}%):",
        balance.utilization_ratio * 100.0
    );
    let daily = [
        ("  ", "Crude protein intake:", balance.crude_protein_intake),
        ("  ", "True protein intake:", balance.true_protein_intake),
        ("  ", "Nitrogen intake:", balance.nitrogen_intake),
        ("  ", utilized_label.as_str(), balance.nitrogen_utilized),
        ("  ", "Nitrogen lost in total:", balance.nitrogen_lost),
        ("    ", "via urine (urea/amides):", balance.nitrogen_via_urine),
        ("    ", "via feces (undigested):", balance.nitrogen_via_feces),
    ];
    for (indent, label, value) in daily {
        let width = 33 - indent.len();
        writeln!(out, "{}{:<width$}{:.0} g/day", indent, label, value)?;
    }
    writeln!(out, "  {:<31}{:.1} g/kg DM", "Crude fiber:", profile.crude_fiber)?;

    writeln!(out)?;
    writeln!(out, "Health check")?;
    writeln!(
        out,
        "  {} {}: {}",
        severity_marker(verdict.severity()),
        verdict.title(),
        verdict.advice()
    )
}

/// Summary of a search. The sentinel is reported as a distinct outcome that
/// keeps `current` as the active mix.
pub fn write_outcome(
    out: &mut impl Write,
    outcome: &OptimizationOutcome,
    current: &FeedMixComposition,
) -> io::Result<()> {
    match outcome.best() {
        Some((composition, ratio)) => writeln!(
            out,
            "✔ Optimal mix set: {}. Utilization: {:.1}% within health limits ({} of {} candidates feasible).",
            composition,
            ratio * 100.0,
            outcome.candidates_feasible,
            outcome.candidates_evaluated
        ),
        None => writeln!(
            out,
            "⚠ No feasible mix found within health limits among {} candidates. Keeping {}.",
            outcome.candidates_evaluated, current
        ),
    }
}

pub fn write_feed_table(out: &mut impl Write, table: &FeedTable) -> io::Result<()> {
    writeln!(
        out,
        "{:<14} {:<14} {:>14} {:>14} {:>14}",
        "Feed", "Key", "Crude protein", "True protein", "Crude fiber"
    )?;
    for (feed, props) in table.iter() {
        writeln!(
            out,
            "{:<14} {:<14} {:>14.1} {:>14.1} {:>14.1}",
            feed.to_string(),
            feed.key(),
            props.crude_protein,
            props.true_protein,
            props.crude_fiber
        )?;
    }
    writeln!(out, "(values in g/kg dry matter)")
}
