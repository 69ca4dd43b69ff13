//! Prepared dashboard views
//!
//! A [`DashboardReport`] bundles everything the dashboard shows for one
//! state of the controls: headline metrics, the threshold panel, the tier
//! breakdown and both rankings. Renderers receive it fully computed.

use std::fmt;

use serde::Serialize;

use crate::algorithm::{
    CriticalityThreshold, RankedRequest, RankingKind, SummaryMetrics, TOP_N, ThresholdMetrics,
    TierAggregate, aggregate_by_tier, summarize, summarize_over_threshold,
};
use crate::error::Result;
use crate::filter::RequestSelection;
use crate::models::{Dataset, LoadReport, PurchaseRequest};

/// Title of the dashboard
pub const DASHBOARD_TITLE: &str = "Dashboard de Análise de Urgência de SCs";

/// Warning shown when the controls leave no rows
pub const EMPTY_SELECTION_MESSAGE: &str =
    "Nenhum dado encontrado para a combinação de filtros selecionada.";

/// All views of one dashboard state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    /// Source file of the loaded dataset
    pub source: Option<String>,
    /// Load time as `dd/mm/YYYY HH:MM:SS`
    pub updated_at: Option<String>,
    pub load_report: LoadReport,
    pub selection: RequestSelection,
    pub summary: SummaryMetrics,
    pub threshold: ThresholdMetrics,
    pub tiers: Vec<TierAggregate>,
    pub top_oldest: Vec<RankedRequest>,
    pub top_priority: Vec<RankedRequest>,
}

impl DashboardReport {
    /// Compute every view for a selection and threshold
    #[must_use]
    pub fn build(
        dataset: &Dataset,
        selection: &RequestSelection,
        threshold: CriticalityThreshold,
    ) -> Self {
        let view = selection.apply(dataset);
        Self::from_view(dataset, selection, threshold, &view)
    }

    /// Compute every view from an already filtered view
    #[must_use]
    pub fn from_view(
        dataset: &Dataset,
        selection: &RequestSelection,
        threshold: CriticalityThreshold,
        view: &[&PurchaseRequest],
    ) -> Self {
        let ranked = |kind: RankingKind| -> Vec<RankedRequest> {
            kind.rank(view, TOP_N)
                .into_iter()
                .map(RankedRequest::from)
                .collect()
        };

        Self {
            source: dataset.source().map(|path| path.display().to_string()),
            updated_at: dataset.loaded_at_display(),
            load_report: dataset.report(),
            selection: selection.clone(),
            summary: summarize(view),
            threshold: summarize_over_threshold(view, threshold),
            tiers: aggregate_by_tier(view),
            top_oldest: ranked(RankingKind::Oldest),
            top_priority: ranked(RankingKind::Priority),
        }
    }

    /// Whether the selection left no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summary.row_count == 0
    }

    /// Serialize the report as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the report as plain text
    #[must_use]
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DashboardReport {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(out, "{DASHBOARD_TITLE}")?;
        if let Some(source) = &self.source {
            writeln!(out, "Arquivo: {source}")?;
        }
        if let Some(updated_at) = &self.updated_at {
            writeln!(out, "Dados atualizados em: {updated_at}")?;
        }
        writeln!(out, "---")?;

        if self.is_empty() {
            writeln!(out, "{EMPTY_SELECTION_MESSAGE}")?;
            return Ok(());
        }

        writeln!(out, "Valor Total (R$): {}", format_thousands(self.summary.total_value, 0))?;
        writeln!(out, "Total de SCs (Únicas): {}", self.summary.distinct_requests)?;
        if let Some(oldest) = self.summary.oldest_days_open {
            writeln!(out, "SC Mais Antiga: {oldest} dias")?;
        }

        writeln!(
            out,
            "SCs Únicas > {} dias: {}",
            self.threshold.threshold.days(),
            self.threshold.distinct_requests
        )?;
        writeln!(out, "Valor: R$ {}", format_thousands(self.threshold.total_value, 2))?;
        writeln!(out, "---")?;

        writeln!(out, "Valor Acumulado por Nível de Urgência")?;
        for tier in &self.tiers {
            writeln!(
                out,
                "  {:<22} R$ {:>16}  {} SCs",
                tier.tier.label(),
                format_thousands(tier.total_value, 2),
                tier.distinct_requests
            )?;
        }

        write_ranking(out, RankingKind::Oldest, &self.top_oldest)?;
        write_ranking(out, RankingKind::Priority, &self.top_priority)
    }
}

fn write_ranking(
    out: &mut fmt::Formatter<'_>,
    kind: RankingKind,
    ranked: &[RankedRequest],
) -> fmt::Result {
    writeln!(out, "---")?;
    writeln!(out, "{}", kind.title())?;
    for (position, entry) in ranked.iter().enumerate() {
        writeln!(
            out,
            "  {:>2}. {:<28} {:>5} dias  R$ {:>14}  score {:.0}",
            position + 1,
            entry.label,
            entry.days_open,
            format_thousands(entry.value, 2),
            entry.score
        )?;
    }
    Ok(())
}

/// Format a number with `,` thousands grouping and a fixed number of decimals
///
/// `format_thousands(1234567.891, 2)` gives `1,234,567.89`.
#[must_use]
pub fn format_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(formatted.len() + integer.len() / 3);
    for (idx, digit) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = value.is_sign_negative() && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut result = String::new();
    if negative {
        result.push('-');
    }
    result.push_str(&grouped);
    if let Some(fraction) = fraction {
        result.push('.');
        result.push_str(fraction);
    }
    result
}
