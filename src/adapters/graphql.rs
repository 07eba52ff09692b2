use crate::config::credential::AccessToken;
use crate::utils::error::{ExportError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const ACCESS_TOKEN_HEADER: &str = "Access-Token";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlRequest<'a, V: Serialize> {
    query: &'a str,
    variables: V,
    operation_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorMessage {
    message: String,
}

/// GraphQL-over-HTTP client bound to one endpoint and credential.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    client: Client,
    endpoint: String,
    token: AccessToken,
}

impl GraphQlClient {
    pub fn new(endpoint: impl Into<String>, token: AccessToken) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            token,
        }
    }

    /// Posts `query` and decodes `data` into `T`. Any entry in `errors` fails the call.
    pub async fn execute<V, T>(&self, operation: &str, query: &str, variables: V) -> Result<T>
    where
        V: Serialize + Send,
        T: DeserializeOwned,
    {
        let request = GraphQlRequest {
            query,
            variables,
            operation_name: operation,
        };

        tracing::debug!("POST {} ({})", self.endpoint, operation);
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCESS_TOKEN_HEADER, self.token.as_str())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        let body = response.text().await?;

        let decoded: GraphQlResponse<T> = match serde_json::from_str(&body) {
            Ok(decoded) => decoded,
            Err(_) if !status.is_success() => {
                return Err(ExportError::HttpStatusError {
                    status: status.as_u16(),
                    body: truncate(&body, 200),
                });
            }
            Err(e) => {
                return Err(ExportError::MalformedResponseError {
                    operation: operation.to_string(),
                    message: e.to_string(),
                });
            }
        };

        if !decoded.errors.is_empty() {
            return Err(ExportError::GraphQlError {
                operation: operation.to_string(),
                messages: decoded.errors.into_iter().map(|e| e.message).collect(),
            });
        }

        if !status.is_success() {
            return Err(ExportError::HttpStatusError {
                status: status.as_u16(),
                body: truncate(&body, 200),
            });
        }

        decoded
            .data
            .ok_or_else(|| ExportError::MalformedResponseError {
                operation: operation.to_string(),
                message: "response has no data".to_string(),
            })
    }
}

fn truncate(body: &str, max_chars: usize) -> String {
    body.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Ping {
        ping: String,
    }

    fn client(server: &MockServer) -> GraphQlClient {
        GraphQlClient::new(server.url("/graphql"), AccessToken::new("tok-1").unwrap())
    }

    #[tokio::test]
    async fn test_execute_sends_token_and_operation() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/graphql")
                .header(ACCESS_TOKEN_HEADER, "tok-1")
                .json_body(json!({
                    "query": "query ping { ping }",
                    "variables": { "x": 1 },
                    "operationName": "ping"
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({ "data": { "ping": "pong" } }));
        });

        let data: Ping = client(&server)
            .execute("ping", "query ping { ping }", json!({ "x": 1 }))
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(data.ping, "pong");
    }

    #[tokio::test]
    async fn test_graphql_errors_fail_the_call() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/graphql");
            then.status(200).json_body(json!({
                "data": null,
                "errors": [{ "message": "Access denied" }]
            }));
        });

        let err = client(&server)
            .execute::<_, Ping>("ping", "query ping { ping }", json!({}))
            .await
            .unwrap_err();

        match err {
            ExportError::GraphQlError {
                operation,
                messages,
            } => {
                assert_eq!(operation, "ping");
                assert_eq!(messages, vec!["Access denied".to_string()]);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/graphql");
            then.status(502).body("Bad Gateway");
        });

        let err = client(&server)
            .execute::<_, Ping>("ping", "query ping { ping }", json!({}))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ExportError::HttpStatusError { status: 502, ref body } if body == "Bad Gateway"
        ));
    }

    #[tokio::test]
    async fn test_missing_data_is_malformed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/graphql");
            then.status(200).json_body(json!({}));
        });

        let err = client(&server)
            .execute::<_, Ping>("ping", "query ping { ping }", json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, ExportError::MalformedResponseError { .. }));
    }
}
