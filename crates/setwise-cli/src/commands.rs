use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, info_span};

use setwise_cli::hobbit::{Hobbit, HobbitRules};
use setwise_cli::logging::redact_value;
use setwise_cli::report::{Report, rules_table};

use crate::cli::{CheckArgs, OutputArg};

/// Check one record and print the report. Returns whether it was admitted.
pub fn run_check(args: &CheckArgs, output: OutputArg) -> Result<bool> {
    let rules = HobbitRules::new().context("declare hobbit rules")?;
    let span = info_span!("check", id = args.id);
    let _guard = span.enter();
    debug!(
        first_name = redact_value(&args.first_name),
        last_name = redact_value(&args.last_name),
        "checking record"
    );

    let outcome = Hobbit::validate(&rules, args.id, &args.first_name, &args.last_name);
    let report = Report::from_outcome(&rules, outcome);
    match &report {
        Report::Admitted { .. } => info!("record admitted"),
        Report::Rejected { rejections } => info!(rejected = rejections.len(), "record rejected"),
    }

    match output {
        OutputArg::Table => println!("{}", report.to_table()),
        OutputArg::Json => println!("{}", report.to_json().context("serialize report")?),
    }
    Ok(report.is_admitted())
}

#[derive(Serialize)]
struct RuleEntry {
    name: &'static str,
    definition: String,
}

pub fn run_rules(output: OutputArg) -> Result<()> {
    let rules = HobbitRules::new().context("declare hobbit rules")?;
    match output {
        OutputArg::Table => println!("{}", rules_table(&rules)),
        OutputArg::Json => {
            let entries: Vec<RuleEntry> = rules
                .listing()
                .into_iter()
                .map(|(name, definition)| RuleEntry { name, definition })
                .collect();
            let json = serde_json::to_string_pretty(&entries).context("serialize rules")?;
            println!("{json}");
        }
    }
    Ok(())
}
