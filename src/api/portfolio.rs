use serde_json::Value;

use crate::client::{ApiVersion, GfClient};
use crate::error::GfError;

impl GfClient {
    /// Portfolio performance over `date_range` (e.g. `"1d"`, `"ytd"`,
    /// `"max"`).
    ///
    /// This endpoint lives under `v2` of the API.
    pub async fn performance(&self, date_range: &str) -> Result<Value, GfError> {
        self.get(
            "portfolio/performance",
            &[("range", date_range)],
            ApiVersion::V2,
        )
        .await
    }

    /// Holdings over `date_range`.
    pub async fn holdings(&self, date_range: &str) -> Result<Value, GfError> {
        self.get(
            "portfolio/holdings",
            &[("range", date_range)],
            ApiVersion::V1,
        )
        .await
    }

    /// Position for a symbol from a data source.
    pub async fn position(&self, data_source: &str, symbol: &str) -> Result<Value, GfError> {
        self.get(
            &format!("portfolio/position/{data_source}/{symbol}"),
            &[],
            ApiVersion::V1,
        )
        .await
    }

    /// All details at once, including accounts, positions and summary.
    pub async fn details(&self) -> Result<Value, GfError> {
        self.get("portfolio/details", &[], ApiVersion::V1).await
    }

    /// Investments grouped by period. `group_by` is `"month"` or `"day"`.
    pub async fn investments(&self, group_by: &str, date_range: &str) -> Result<Value, GfError> {
        self.get(
            "portfolio/investments",
            &[("range", date_range), ("groupBy", group_by)],
            ApiVersion::V1,
        )
        .await
    }

    /// Dividends grouped by period. `group_by` is `"month"` or `"day"`.
    pub async fn dividends(&self, group_by: &str, date_range: &str) -> Result<Value, GfError> {
        self.get(
            "portfolio/dividends",
            &[("range", date_range), ("groupBy", group_by)],
            ApiVersion::V1,
        )
        .await
    }
}
