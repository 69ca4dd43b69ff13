mod cli;

use anyhow::Context;
use clap::Parser;

use sc_urgency::algorithm::CriticalityThreshold;
use sc_urgency::config::DashboardConfig;
use sc_urgency::export::export_csv_file;
use sc_urgency::filter::{FilterOptions, RequestSelection};
use sc_urgency::loader::DatasetCache;
use sc_urgency::report::DashboardReport;
use sc_urgency::utils::logging::{print_filter_options, print_load_failure, print_report};

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let threshold = CriticalityThreshold::try_from(cli.threshold)
        .context("Invalid value for --limite")?;

    let mut config = DashboardConfig::for_source(cli.source.clone());
    if let Some(date) = cli.reference_date {
        config = config.with_reference_date(date);
    }

    let mut cache = DatasetCache::new();
    let outcome = cache.load_outcome(&config);
    if let Some(message) = outcome.error_message() {
        print_load_failure(message);
    }
    let dataset = outcome.dataset();

    if cli.options {
        print_filter_options(&FilterOptions::from_dataset(&dataset));
        return Ok(());
    }

    let selection = RequestSelection::from_choices(&cli.requester, &cli.approver, &cli.project);
    let view = selection.apply(&dataset);
    let report = DashboardReport::from_view(&dataset, &selection, threshold, &view);
    print_report(&report, cli.json).context("Failed to render the dashboard")?;

    if let Some(path) = &cli.export {
        export_csv_file(path, &dataset, &view, &config.export)
            .with_context(|| format!("Failed to export to {}", path.display()))?;
    }

    Ok(())
}
