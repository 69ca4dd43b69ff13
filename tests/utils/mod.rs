use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use sc_urgency::DashboardConfig;
use tempfile::TempDir;

/// A semicolon-separated summary covering the cleaning edge cases
///
/// Eight data rows: two without SC, one with an unreadable date, two whose
/// value becomes zero and one with a creation date after the reference date.
pub const SAMPLE_SUMMARY: &str = "\
SC;WBS;DESCRIÇÃO;VALOR;DATA CRIAÇÃO;REQUISITANTE;PENDENTE COM;PROJETO
1001; W-01 ;Cabos;1.500,50;01/12/2024;Ana;Caio;Linha Norte
1002;W-02;Painel;abc;15/10/2024;Bia;Caio;Subestação Sul
1003;W-01;Relés;20000;2024-06-01;Ana;Duda;Linha Norte
 ;W-03;Sem SC;10;01/01/2024;Ana;Caio;X
nan;W-03;;10;01/01/2024;Ana;Caio;X
1004;W-04;Data ruim;10;não sei;Ana;Caio;X
1001;W-05;Cabos extra;-5;15/11/2024;Bia;Duda;Linha Norte
1005;;Futura;100;15/01/2025;Caio;Caio;
";

/// "Today" for every fixture
#[must_use]
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
}

/// Write a source file into a directory
pub fn write_source(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// A temporary directory holding `resumo.csv` with [`SAMPLE_SUMMARY`], plus
/// a configuration pointing at it
///
/// The directory is removed when the returned `TempDir` is dropped.
#[must_use]
pub fn sample_source() -> (TempDir, DashboardConfig) {
    let dir = TempDir::new().unwrap();
    let path = write_source(dir.path(), "resumo.csv", SAMPLE_SUMMARY);
    let config = DashboardConfig::for_source(path).with_reference_date(reference_date());
    (dir, config)
}
