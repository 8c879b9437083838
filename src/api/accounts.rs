use serde_json::Value;

use crate::client::{ApiVersion, GfClient};
use crate::error::GfError;

impl GfClient {
    /// All accounts.
    pub async fn accounts(&self) -> Result<Value, GfError> {
        self.get("account", &[], ApiVersion::V1).await
    }
}
