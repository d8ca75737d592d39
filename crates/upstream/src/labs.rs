//! Lab result service reply.
//!
//! The lab service returns one order per requested analysis. The actual result values sit
//! in a tabular sub-payload with a fixed column layout: a header row followed by data rows,
//! where each row is `[analysis, value, unit, reference range]`. The numeric result of an
//! order is read from the value column of the first data row.

use serde::Deserialize;

/// Zero-based column offsets of the result table.
pub const ANALYSIS_COLUMN: usize = 0;
pub const VALUE_COLUMN: usize = 1;
pub const UNIT_COLUMN: usize = 2;
pub const REFERENCE_RANGE_COLUMN: usize = 3;

/// Reply of the lab result service.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabReply {
    #[serde(default)]
    pub orders: Vec<LabOrder>,
}

/// One lab order with its result table.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabOrder {
    pub order_id: Option<String>,
    pub accession_number: Option<String>,
    pub requisition_id: Option<String>,

    /// NPU analysis code.
    pub analysis_code: Option<String>,
    pub analysis_name: Option<String>,

    /// Upstream status word: `endelig`, `foreløbig` or `annulleret`.
    pub status: Option<String>,

    pub observation_time: Option<String>,
    pub laboratory: Option<String>,

    pub result_table: Option<ResultTable>,
}

/// The fixed-shape tabular sub-payload: a header row followed by data rows.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultTable {
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    /// The first data row, i.e. the row after the header. `None` when the table holds a
    /// header only, or nothing at all.
    pub fn first_data_row(&self) -> Option<&[String]> {
        self.rows.get(1).map(Vec::as_slice)
    }

    /// The cell at `column` of the first data row, when both exist.
    pub fn first_data_cell(&self, column: usize) -> Option<&str> {
        self.first_data_row()
            .and_then(|row| row.get(column))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_json;

    #[test]
    fn parses_order_with_result_table() {
        let reply: LabReply = from_json(
            r#"{
                "orders": [{
                    "orderId": "ORD-7001",
                    "analysisCode": "NPU19748",
                    "analysisName": "C-reaktivt protein",
                    "status": "endelig",
                    "observationTime": "2024-02-05T08:15:00",
                    "resultTable": {
                        "rows": [
                            ["Analyse", "Resultat", "Enhed", "Referenceinterval"],
                            ["C-reaktivt protein", "5.2", "mg/L", "< 8"]
                        ]
                    }
                }]
            }"#,
        )
        .expect("parse lab reply");

        let order = &reply.orders[0];
        let table = order.result_table.as_ref().expect("result table");
        assert_eq!(table.first_data_cell(VALUE_COLUMN), Some("5.2"));
        assert_eq!(table.first_data_cell(UNIT_COLUMN), Some("mg/L"));
    }

    #[test]
    fn header_only_table_has_no_data_row() {
        let table = ResultTable {
            rows: vec![vec!["Analyse".into(), "Resultat".into()]],
        };
        assert!(table.first_data_row().is_none());
        assert!(table.first_data_cell(VALUE_COLUMN).is_none());
    }

    #[test]
    fn tolerates_missing_and_unknown_fields() {
        let reply: LabReply =
            from_json(r#"{"orders": [{"newUpstreamField": true}], "pagination": {}}"#)
                .expect("parse sparse reply");
        assert_eq!(reply.orders.len(), 1);
        assert!(reply.orders[0].order_id.is_none());
    }

    #[test]
    fn empty_object_parses_to_no_orders() {
        let reply: LabReply = from_json("{}").expect("parse empty reply");
        assert!(reply.orders.is_empty());
    }
}
