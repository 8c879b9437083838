use serde_json::Value;

use crate::client::{ApiVersion, GfClient};
use crate::error::GfError;

impl GfClient {
    /// Overview of the market data loaded on the instance. Requires an
    /// admin user.
    pub async fn market_data_admin(&self) -> Result<Value, GfError> {
        self.get("admin/market-data", &[], ApiVersion::V1).await
    }

    /// Market data for a symbol from a data source.
    pub async fn market_data(&self, data_source: &str, symbol: &str) -> Result<Value, GfError> {
        self.get(
            &format!("admin/market-data/{data_source}/{symbol}"),
            &[],
            ApiVersion::V1,
        )
        .await
    }
}
