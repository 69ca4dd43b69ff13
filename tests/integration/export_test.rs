use crate::utils::sample_source;
use sc_urgency::export::{export_csv_bytes, export_csv_file};
use sc_urgency::filter::RequestSelection;
use sc_urgency::loader::load_requests;
use tempfile::TempDir;

const BOM: &[u8] = b"\xEF\xBB\xBF";

#[test]
fn test_export_filtered_view() -> sc_urgency::Result<()> {
    let (_dir, config) = sample_source();
    let dataset = load_requests(&config)?;
    let view = RequestSelection::all().with_requester("Ana").apply(&dataset);

    let bytes = export_csv_bytes(&dataset, &view, &config.export)?;
    assert!(bytes.starts_with(BOM));

    let text = String::from_utf8(bytes[BOM.len()..].to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "SC;WBS;DESCRIÇÃO;VALOR;DATA CRIAÇÃO;REQUISITANTE;PENDENTE COM;PROJETO;DIAS EM ABERTO",
            "1001;W-01;Cabos;1500,5;2024-12-01;Ana;Caio;Linha Norte;30",
            "1003;W-01;Relés;20000,0;2024-06-01;Ana;Duda;Linha Norte;213",
        ]
    );
    assert!(!text.contains("SC_WBS"));
    assert!(!text.contains("PROJETO_COMPLETO"));
    Ok(())
}

#[test]
fn test_export_has_one_line_per_row() -> sc_urgency::Result<()> {
    let (_dir, config) = sample_source();
    let dataset = load_requests(&config)?;
    let view = dataset.view();

    let out_dir = TempDir::new().unwrap();
    let path = out_dir.path().join("saida").join(&config.export.file_name);
    let written = export_csv_file(&path, &dataset, &view, &config.export)?;
    assert_eq!(written, 5);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 6);
    assert!(contents.ends_with('\n'));
    Ok(())
}

#[test]
fn test_exported_file_loads_back() -> sc_urgency::Result<()> {
    let (_dir, config) = sample_source();
    let dataset = load_requests(&config)?;

    let out_dir = TempDir::new().unwrap();
    let path = out_dir.path().join("analise.csv");
    export_csv_file(&path, &dataset, &dataset.view(), &config.export)?;

    let reloaded = load_requests(&sc_urgency::DashboardConfig::for_source(&path).with_reference_date(crate::utils::reference_date()))?;
    assert_eq!(reloaded.len(), dataset.len());
    assert_eq!(reloaded.report().values_coerced, 0);
    let values: Vec<f64> = reloaded.rows().iter().map(|r| r.value).collect();
    assert_eq!(values, [1500.5, 0.0, 20_000.0, 0.0, 100.0]);
    Ok(())
}
