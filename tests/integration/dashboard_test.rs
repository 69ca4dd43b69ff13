use crate::utils::sample_source;
use sc_urgency::algorithm::{
    TOP_N, aggregate_by_tier, summarize, summarize_over_threshold, tiers_to_record_batch,
    top_oldest, top_priority,
};
use sc_urgency::filter::{FilterOptions, RequestSelection};
use sc_urgency::loader::load_requests;
use sc_urgency::report::{DashboardReport, EMPTY_SELECTION_MESSAGE};
use sc_urgency::{CriticalityThreshold, UrgencyTier};

#[test]
fn test_summary_over_unfiltered_view() -> sc_urgency::Result<()> {
    let (_dir, config) = sample_source();
    let dataset = load_requests(&config)?;
    let view = RequestSelection::all().apply(&dataset);

    let summary = summarize(&view);
    assert_eq!(summary.row_count, 5);
    assert_eq!(summary.distinct_requests, 4);
    assert!((summary.total_value - 21_600.5).abs() < 1e-9);
    assert_eq!(summary.oldest_days_open, Some(213));

    let over_60 = summarize_over_threshold(&view, CriticalityThreshold::Days60);
    assert_eq!(over_60.distinct_requests, 2);
    assert!((over_60.total_value - 20_000.0).abs() < 1e-9);

    let over_30 = summarize_over_threshold(&view, CriticalityThreshold::Days30);
    assert_eq!(over_30.distinct_requests, 3);

    Ok(())
}

#[test]
fn test_tier_breakdown_adds_up() -> sc_urgency::Result<()> {
    let (_dir, config) = sample_source();
    let dataset = load_requests(&config)?;
    let view = dataset.view();

    let tiers = aggregate_by_tier(&view);
    assert_eq!(
        tiers.iter().map(|t| t.tier).collect::<Vec<_>>(),
        UrgencyTier::ALL.to_vec()
    );
    assert_eq!(tiers[0].distinct_requests, 2);
    assert!((tiers[0].total_value - 1600.5).abs() < 1e-9);

    let tier_total: f64 = tiers.iter().map(|t| t.total_value).sum();
    assert!((tier_total - summarize(&view).total_value).abs() < 1e-9);

    let batch = tiers_to_record_batch(&tiers)?;
    assert_eq!(batch.num_rows(), 4);
    Ok(())
}

#[test]
fn test_rankings() -> sc_urgency::Result<()> {
    let (_dir, config) = sample_source();
    let dataset = load_requests(&config)?;
    let view = dataset.view();

    let oldest: Vec<u32> = top_oldest(&view, TOP_N).iter().map(|r| r.days_open).collect();
    assert_eq!(oldest, [213, 77, 46, 30, 0]);

    // Zero scores tie and keep source order
    let priority: Vec<String> = top_priority(&view, TOP_N)
        .iter()
        .map(|r| r.composite_key.clone())
        .collect();
    assert_eq!(priority, ["1003-W-01", "1001-W-01", "1002-W-02", "1001-W-05", "1005-Não atribuído"]);
    Ok(())
}

#[test]
fn test_filter_options_and_selection() -> sc_urgency::Result<()> {
    let (_dir, config) = sample_source();
    let dataset = load_requests(&config)?;

    let options = FilterOptions::from_dataset(&dataset);
    assert_eq!(options.requesters, ["Todos", "Ana", "Bia", "Caio"]);
    assert_eq!(
        options.projects,
        [
            "Todos",
            "Linha Norte (W-01)",
            "Linha Norte (W-05)",
            "Não informado (Não atribuído)",
            "Subestação Sul (W-02)",
        ]
    );

    let selection = RequestSelection::from_choices("Ana", "Todos", "Linha Norte (W-01)");
    let view = selection.apply(&dataset);
    assert_eq!(view.len(), 2);
    assert!(view.iter().all(|r| r.requester == "Ana"));

    // Filtering never touches the base set
    assert_eq!(dataset.len(), 5);
    Ok(())
}

#[test]
fn test_empty_selection_is_a_valid_state() -> sc_urgency::Result<()> {
    let (_dir, config) = sample_source();
    let dataset = load_requests(&config)?;
    let selection = RequestSelection::all().with_requester("Bia").with_approver("Caio").with_project("Linha Norte (W-05)");

    let report = DashboardReport::build(&dataset, &selection, CriticalityThreshold::default());
    assert!(report.is_empty());
    assert_eq!(report.summary.total_value, 0.0);
    assert_eq!(report.summary.oldest_days_open, None);
    assert!(report.tiers.is_empty());
    assert!(report.top_oldest.is_empty());
    assert!(report.render_text().contains(EMPTY_SELECTION_MESSAGE));
    Ok(())
}
