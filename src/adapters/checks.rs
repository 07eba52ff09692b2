use crate::adapters::graphql::GraphQlClient;
use crate::domain::model::{Item, Order, Paging, TimeWindow};
use crate::domain::ports::ReceiptSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const CHECKS_QUERY: &str = r#"
query checks($offset: Int, $limit: Int, $dateFrom: DateTime, $dateTo: DateTime) {
  checks(offset: $offset, limit: $limit, dateFrom: $dateFrom, dateTo: $dateTo) {
    id
    created
    storeId
    __typename
  }
}"#;

pub const CHECK_ITEMS_QUERY: &str = r#"
query check($storeId: ID!, $checkId: ID!, $creationDate: DateTime!) {
  check(storeId: $storeId, checkId: $checkId, creationDate: $creationDate) {
    items {
      name
      unit
      count
      price
      unitText
      __typename
    }
    __typename
  }
}"#;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChecksVariables {
    offset: i32,
    limit: i32,
    date_from: String,
    date_to: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckVariables<'a> {
    store_id: i32,
    check_id: &'a str,
    creation_date: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChecksData {
    checks: Vec<Order>,
}

#[derive(Debug, Deserialize)]
struct CheckData {
    check: CheckItems,
}

#[derive(Debug, Deserialize)]
struct CheckItems {
    items: Vec<Item>,
}

/// The retailer's checks API.
pub struct ChecksApi {
    client: GraphQlClient,
}

impl ChecksApi {
    pub fn new(client: GraphQlClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReceiptSource for ChecksApi {
    async fn fetch_orders(&self, window: &TimeWindow, paging: Paging) -> Result<Vec<Order>> {
        let variables = ChecksVariables {
            offset: paging.offset,
            limit: paging.limit,
            date_from: window.from_param(),
            date_to: window.to_param(),
        };

        let data: ChecksData = self
            .client
            .execute("checks", CHECKS_QUERY, variables)
            .await?;
        Ok(data.checks)
    }

    async fn fetch_items(&self, order: &Order) -> Result<Vec<Item>> {
        let variables = CheckVariables {
            store_id: order.store_id,
            check_id: &order.id,
            creation_date: &order.created,
        };

        let data: CheckData = self
            .client
            .execute("check", CHECK_ITEMS_QUERY, variables)
            .await?;
        Ok(data.check.items)
    }
}
