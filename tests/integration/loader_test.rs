use crate::utils::{reference_date, sample_source, write_source};
use sc_urgency::config::{PLACEHOLDER_UNASSIGNED, PLACEHOLDER_UNINFORMED};
use sc_urgency::loader::{LoadOutcome, load_requests};
use sc_urgency::models::requests_to_record_batch;
use sc_urgency::{DashboardConfig, DashboardError, UrgencyTier};
use tempfile::TempDir;

/// Cleaning drops invalid rows and derives the computed fields
#[test]
fn test_load_and_clean_sample() -> sc_urgency::Result<()> {
    let (_dir, config) = sample_source();
    let dataset = load_requests(&config)?;

    let report = dataset.report();
    assert_eq!(report.rows_read, 8);
    assert_eq!(report.dropped_missing_sc, 2);
    assert_eq!(report.dropped_invalid_date, 1);
    assert_eq!(report.values_coerced, 2);
    assert_eq!(report.rows_kept(), 5);
    assert_eq!(dataset.len(), 5);

    let first = &dataset.rows()[0];
    assert_eq!(first.sc, "1001");
    assert_eq!(first.wbs, "W-01");
    assert!((first.value - 1500.5).abs() < 1e-9);
    assert_eq!(first.days_open, 30);
    assert_eq!(first.composite_key, "1001-W-01");
    assert_eq!(first.project_label, "Linha Norte (W-01)");
    assert_eq!(first.urgency(), UrgencyTier::Normal);

    let days: Vec<u32> = dataset.rows().iter().map(|r| r.days_open).collect();
    assert_eq!(days, [30, 77, 213, 46, 0]);

    let future = &dataset.rows()[4];
    assert_eq!(future.wbs, PLACEHOLDER_UNASSIGNED);
    assert_eq!(future.project, PLACEHOLDER_UNINFORMED);
    assert_eq!(future.urgency(), UrgencyTier::Normal);

    assert!(dataset.rows().iter().all(|r| r.value >= 0.0));
    assert!(dataset.loaded_at().is_some());
    assert_eq!(dataset.extra_columns(), ["DESCRIÇÃO"]);

    Ok(())
}

/// Absent categorical columns get placeholders instead of failing the load
#[test]
fn test_missing_categorical_columns() -> sc_urgency::Result<()> {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        dir.path(),
        "minimo.csv",
        "SC,VALOR,DATA CRIAÇÃO\n77,10.5,2024-12-01\n",
    );
    let dataset = load_requests(&DashboardConfig::for_source(path).with_reference_date(reference_date()))?;

    let request = &dataset.rows()[0];
    assert_eq!(request.requester, PLACEHOLDER_UNINFORMED);
    assert_eq!(request.approver, PLACEHOLDER_UNINFORMED);
    assert_eq!(request.wbs, PLACEHOLDER_UNASSIGNED);
    assert_eq!(request.project_label, "Não informado (Não atribuído)");
    assert!((request.value - 10.5).abs() < 1e-9);

    Ok(())
}

#[test]
fn test_missing_required_column_is_schema_error() {
    let dir = TempDir::new().unwrap();
    let path = write_source(dir.path(), "sem_valor.csv", "SC;DATA CRIAÇÃO\n1;01/01/2024\n");
    let result = load_requests(&DashboardConfig::for_source(path));

    assert!(matches!(result, Err(DashboardError::Schema(column)) if column == "VALOR"));
}

#[test]
fn test_missing_source_outcome() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nao_existe.xlsx");
    let result = load_requests(&DashboardConfig::for_source(&path)).map(std::sync::Arc::new);
    let outcome = LoadOutcome::from_result(result, &path);

    assert!(!outcome.is_loaded());
    assert_eq!(
        outcome.error_message(),
        Some(format!("ERRO CRÍTICO: Arquivo de resumo '{}' não foi encontrado.", path.display()).as_str())
    );
    assert!(outcome.dataset().is_empty());
}

#[test]
fn test_unreadable_source_outcome() {
    let dir = TempDir::new().unwrap();
    let path = write_source(dir.path(), "resumo.pdf", "%PDF-1.4");
    let result = load_requests(&DashboardConfig::for_source(&path)).map(std::sync::Arc::new);
    let outcome = LoadOutcome::from_result(result, &path);

    let message = outcome.error_message().unwrap();
    assert!(message.starts_with("Ocorreu um erro ao ler o arquivo de resumo: "));
    assert!(outcome.dataset().is_empty());
}

/// The cleaned rows convert to Arrow for chart collaborators
#[test]
fn test_request_view_record_batch() -> sc_urgency::Result<()> {
    let (_dir, config) = sample_source();
    let dataset = load_requests(&config)?;
    let batch = requests_to_record_batch(&dataset.view())?;

    assert_eq!(batch.num_rows(), dataset.len());
    assert_eq!(batch.schema().field(0).name(), "SC");
    Ok(())
}
