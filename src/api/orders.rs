use serde_json::Value;

use crate::client::{ApiVersion, GfClient};
use crate::error::GfError;

impl GfClient {
    /// All orders, optionally filtered to a single account.
    pub async fn orders(&self, account_id: Option<&str>) -> Result<Value, GfError> {
        let params: Vec<(&str, &str)> = match account_id {
            Some(id) => vec![("accounts", id)],
            None => Vec::new(),
        };
        self.get("order", &params, ApiVersion::V1).await
    }

    /// Import transactions. The response carries no useful payload and is
    /// discarded.
    pub async fn import_transactions(&self, data: &Value) -> Result<(), GfError> {
        self.post("import", Some(data), ApiVersion::V1, None).await?;
        Ok(())
    }
}
