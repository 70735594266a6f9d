//! DynamoDB-backed table client for bookrack.
//!
//! Wraps `aws_sdk_dynamodb::Client` with typed single-item operations and a
//! scan that drains the paginator. Items cross the SDK boundary through
//! `serde_dynamo`, so callers work with plain serde types.

use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use bookrack_kernel::settings::TableSettings;

/// Failure raised by table operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("item conversion failed: {0}")]
    Conversion(#[from] serde_dynamo::Error),

    #[error("table request failed: {0}")]
    Request(String),
}

/// Handle to one DynamoDB table. Created once at process start and shared;
/// the underlying SDK client is cheaply cloneable.
#[derive(Debug, Clone)]
pub struct TableClient {
    client: Client,
    table_name: String,
}

impl TableClient {
    /// Build a client from the ambient AWS configuration, honoring the
    /// endpoint override from settings when one is present (local DynamoDB).
    pub async fn connect(settings: &TableSettings) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(endpoint) = &settings.endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        let config = loader.load().await;

        tracing::info!(
            table = %settings.name,
            endpoint = settings.endpoint.as_deref().unwrap_or("default"),
            "connected table client"
        );

        Self::new(Client::new(&config), settings.name.clone())
    }

    /// Wrap an already-built SDK client.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Fetch a single item by key. `Ok(None)` when the key has no record.
    pub async fn get_item<T: DeserializeOwned>(
        &self,
        key_name: &str,
        key_value: &str,
    ) -> Result<Option<T>, StoreError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(key_name, AttributeValue::S(key_value.to_string()))
            .send()
            .await
            .map_err(|err| StoreError::Request(DisplayErrorContext(&err).to_string()))?;

        match output.item {
            Some(item) => Ok(Some(serde_dynamo::from_item(item)?)),
            None => Ok(None),
        }
    }

    /// Put an item, fully overwriting any existing record under the same key.
    pub async fn put_item<T: Serialize>(&self, item: &T) -> Result<(), StoreError> {
        let item: std::collections::HashMap<String, AttributeValue> =
            serde_dynamo::to_item(item)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|err| StoreError::Request(DisplayErrorContext(&err).to_string()))?;

        Ok(())
    }

    /// Delete a single item by key. Deleting an absent key is not an error.
    pub async fn delete_item(&self, key_name: &str, key_value: &str) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(key_name, AttributeValue::S(key_value.to_string()))
            .send()
            .await
            .map_err(|err| StoreError::Request(DisplayErrorContext(&err).to_string()))?;

        Ok(())
    }

    /// Retrieve every item in the table, draining the scan paginator.
    pub async fn scan_all<T: DeserializeOwned>(&self) -> Result<Vec<T>, StoreError> {
        let mut pages = self
            .client
            .scan()
            .table_name(&self.table_name)
            .into_paginator()
            .send();

        let mut items = Vec::new();
        while let Some(page) = pages.next().await {
            let page =
                page.map_err(|err| StoreError::Request(DisplayErrorContext(&err).to_string()))?;
            for item in page.items.unwrap_or_default() {
                items.push(serde_dynamo::from_item(item)?);
            }
        }

        tracing::debug!(table = %self.table_name, count = items.len(), "scanned table");
        Ok(items)
    }
}
