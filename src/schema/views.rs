//! Arrow schemas of the prepared views handed to chart and table renderers.

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema};

use super::{
    COL_DATA_CRIACAO, COL_DIAS_EM_ABERTO, COL_PENDENTE_COM, COL_PROJETO, COL_PROJETO_COMPLETO,
    COL_REQUISITANTE, COL_SC, COL_SC_WBS, COL_SCORE, COL_URGENCIA, COL_VALOR, COL_WBS,
};

/// Get the Arrow schema for cleaned purchase request rows
pub fn request_view_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new(COL_SC, DataType::Utf8, false),
        Field::new(COL_WBS, DataType::Utf8, false),
        Field::new(COL_REQUISITANTE, DataType::Utf8, false),
        Field::new(COL_PENDENTE_COM, DataType::Utf8, false),
        Field::new(COL_PROJETO, DataType::Utf8, false),
        Field::new(COL_VALOR, DataType::Float64, false),
        Field::new(COL_DATA_CRIACAO, DataType::Date32, false),
        Field::new(COL_SC_WBS, DataType::Utf8, false),
        Field::new(COL_PROJETO_COMPLETO, DataType::Utf8, false),
        Field::new(COL_DIAS_EM_ABERTO, DataType::Int64, false),
        Field::new(COL_URGENCIA, DataType::Utf8, false),
        Field::new(COL_SCORE, DataType::Float64, false),
    ]))
}

/// Get the Arrow schema for the per-tier aggregation
///
/// One row per observed urgency tier, in tier order, with the chart colour
/// the dashboard uses for it.
pub fn tier_view_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new(COL_URGENCIA, DataType::Utf8, false),
        Field::new("VALOR_TOTAL", DataType::Float64, false),
        Field::new("CONTAGEM_SC", DataType::Int64, false),
        Field::new("COR", DataType::Utf8, false),
    ]))
}

/// Get the Arrow schema for a top-N ranking
pub fn ranking_view_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("LABEL", DataType::Utf8, false),
        Field::new(COL_SC, DataType::Utf8, false),
        Field::new(COL_WBS, DataType::Utf8, false),
        Field::new(COL_PROJETO, DataType::Utf8, false),
        Field::new(COL_REQUISITANTE, DataType::Utf8, false),
        Field::new(COL_PENDENTE_COM, DataType::Utf8, false),
        Field::new(COL_DIAS_EM_ABERTO, DataType::Int64, false),
        Field::new(COL_VALOR, DataType::Float64, false),
        Field::new(COL_SCORE, DataType::Float64, false),
    ]))
}
