//! DynamoDB table store
//!
//! Wraps the AWS SDK client behind [`TableStore`]. The client is built from
//! static credentials with retries disabled: a failed scan is reported to the
//! operator straight away.

use super::convert::item_to_record;
use crate::adapters::store::TableStore;
use crate::config::AwsSettings;
use crate::domain::{DumpError, Result, ScanOutput, TableName};
use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::{Credentials, Region};
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::Client;
use secrecy::ExposeSecret;
use std::fmt::Debug;

/// Name reported by the static credentials provider
const CREDENTIALS_SOURCE: &str = "dynamojo-environment";

/// DynamoDB-backed [`TableStore`]
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
}

impl DynamoDbStore {
    /// Builds a store from static environment settings
    ///
    /// Nothing is sent to AWS here; the first request happens on
    /// [`scan`](TableStore::scan).
    pub async fn connect(settings: &AwsSettings) -> Self {
        let credentials = Credentials::new(
            settings.access_key_id.clone(),
            settings.secret_access_key.expose_secret().as_ref().to_string(),
            settings
                .session_token
                .as_ref()
                .map(|token| token.expose_secret().as_ref().to_string()),
            None,
            CREDENTIALS_SOURCE,
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .credentials_provider(credentials)
            .retry_config(RetryConfig::disabled());

        if let Some(endpoint_url) = &settings.endpoint_url {
            tracing::debug!(endpoint_url = %endpoint_url, "Using custom DynamoDB endpoint");
            loader = loader.endpoint_url(endpoint_url);
        }

        let sdk_config = loader.load().await;
        tracing::debug!(region = %settings.region, "DynamoDB client configured");

        Self::from_client(Client::new(&sdk_config))
    }

    /// Wraps an already configured SDK client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TableStore for DynamoDbStore {
    async fn scan(&self, table_name: &TableName) -> Result<ScanOutput> {
        let output = self
            .client
            .scan()
            .table_name(table_name.as_str())
            .send()
            .await
            .map_err(|e| classify_scan_error(table_name, e))?;

        let truncated = output
            .last_evaluated_key()
            .is_some_and(|key| !key.is_empty());

        let records = output
            .items()
            .iter()
            .map(item_to_record)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            table_name = %table_name,
            count = records.len(),
            truncated,
            "Scan response received"
        );

        Ok(ScanOutput { records, truncated })
    }
}

/// Maps an SDK scan failure onto the domain taxonomy
///
/// `ResourceNotFoundException` becomes [`DumpError::TableNotFound`]; every
/// other failure keeps its service code (or transport category) and the full
/// error chain as details.
fn classify_scan_error<R>(table_name: &TableName, err: SdkError<ScanError, R>) -> DumpError
where
    R: Debug,
{
    let code = match &err {
        SdkError::ServiceError(context) => {
            let service_error = context.err();
            if service_error.is_resource_not_found_exception() {
                return DumpError::TableNotFound(table_name.to_string());
            }
            service_error.code().unwrap_or("Unknown").to_string()
        }
        SdkError::TimeoutError(_) => "Timeout".to_string(),
        SdkError::DispatchFailure(_) => "ConnectionFailure".to_string(),
        SdkError::ResponseError(_) => "ResponseError".to_string(),
        SdkError::ConstructionFailure(_) => "ConstructionFailure".to_string(),
        _ => "Unknown".to_string(),
    };

    DumpError::remote(code, DisplayErrorContext(&err).to_string())
}
