//! A minimal JSON-RPC 2.0 client for a Solana node.
//!
//! Only the calls the dashboard needs are implemented. Each call is a single
//! attempt: there is no retry and no client-side timeout, so a transport
//! error ends that attempt.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use crate::address::WalletAddress;
use crate::native_amount::NativeAmount;
use crate::ApiError;

/// Anything that can report the native balance of a wallet.
pub trait BalanceSource {
    async fn get_balance(&self, address: &WalletAddress) -> Result<NativeAmount, ApiError>;
}

#[derive(Serialize, Debug)]
struct RpcRequest<'a, P> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Deserialize, Debug)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize, Debug)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// Wrapper the node puts around most account queries.
#[derive(Deserialize, Debug)]
struct WithContext<T> {
    value: T,
}

/// Decodes a JSON-RPC response body into its `result`.
fn parse_response<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let resp: RpcResponse<T> = serde_json::from_str(body)?;
    if let Some(e) = resp.error {
        return Err(ApiError::Rpc {
            code: e.code,
            message: e.message,
        });
    }
    resp.result
        .ok_or_else(|| ApiError::MalformedResponse("response has neither result nor error".into()))
}

/// Talks to one fixed RPC endpoint over HTTP.
#[derive(Clone, Debug)]
pub struct SolanaRpcClient {
    endpoint: String,
    http: reqwest::Client,
}

impl SolanaRpcClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn call<P: Serialize, T: DeserializeOwned>(
        &self,
        method: &str,
        params: P,
    ) -> Result<T, ApiError> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        };

        let body = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        dioxus_logger::tracing::debug!("{} response: {}", method, body);
        parse_response(&body)
    }
}

impl BalanceSource for SolanaRpcClient {
    async fn get_balance(&self, address: &WalletAddress) -> Result<NativeAmount, ApiError> {
        let balance: WithContext<u64> = self.call("getBalance", [address.to_string()]).await?;
        Ok(NativeAmount::from_lamports(balance.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answers exactly one HTTP request with `status` and `body`.
    ///
    /// Returns the URL to post to and a handle yielding the request body.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];

            let body_start = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed inside headers");
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };
            let headers = String::from_utf8_lossy(&buf[..body_start]).to_ascii_lowercase();
            let len: usize = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .map(|v| v.trim().parse().unwrap())
                .unwrap_or(0);
            while buf.len() < body_start + len {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed inside body");
                buf.extend_from_slice(&chunk[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;

            String::from_utf8(buf[body_start..body_start + len].to_vec()).unwrap()
        });

        (url, handle)
    }

    fn local_client(endpoint: String) -> SolanaRpcClient {
        SolanaRpcClient {
            endpoint,
            http: reqwest::Client::builder().no_proxy().build().unwrap(),
        }
    }

    const WALLET: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

    #[test]
    fn request_is_json_rpc_2() {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method: "getBalance",
            params: ["11111111111111111111111111111111"],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "getBalance",
                "params": ["11111111111111111111111111111111"],
            })
        );
    }

    #[test]
    fn parses_balance_result() {
        let body = r#"{"jsonrpc":"2.0","result":{"context":{"apiVersion":"2.0.15","slot":341197053},"value":2500000000},"id":1}"#;
        let balance: WithContext<u64> = parse_response(body).unwrap();
        assert_eq!(balance.value, 2_500_000_000);
    }

    #[test]
    fn surfaces_rpc_errors() {
        let body = r#"{"jsonrpc":"2.0","error":{"code":-32602,"message":"Invalid param: WrongSize"},"id":1}"#;
        let err = parse_response::<WithContext<u64>>(body).unwrap_err();
        match err {
            ApiError::Rpc { code, message } => {
                assert_eq!(code, -32602);
                assert_eq!(message, "Invalid param: WrongSize");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_response::<WithContext<u64>>("<html>502</html>"),
            Err(ApiError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_response::<WithContext<u64>>(r#"{"jsonrpc":"2.0","id":1}"#),
            Err(ApiError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_response::<WithContext<u64>>(r#"{"jsonrpc":"2.0","result":{"value":-1},"id":1}"#),
            Err(ApiError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn get_balance_posts_a_json_rpc_request() {
        let (url, server) = serve_once(
            "200 OK",
            r#"{"jsonrpc":"2.0","result":{"context":{"slot":1},"value":2500000000},"id":1}"#,
        )
        .await;
        let client = local_client(url);
        let address: WalletAddress = WALLET.parse().unwrap();

        let balance = client.get_balance(&address).await.unwrap();
        assert_eq!(balance, NativeAmount::from_lamports(2_500_000_000));

        let sent: serde_json::Value = serde_json::from_str(&server.await.unwrap()).unwrap();
        assert_eq!(
            sent,
            serde_json::json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "getBalance",
                "params": [WALLET],
            })
        );
    }

    #[tokio::test]
    async fn http_error_status_is_a_transport_error() {
        let (url, server) = serve_once("503 Service Unavailable", "{}").await;
        let client = local_client(url);
        let address: WalletAddress = WALLET.parse().unwrap();

        let err = client.get_balance(&address).await.unwrap_err();
        match err {
            ApiError::Transport(e) => {
                assert_eq!(e.status(), Some(reqwest::StatusCode::SERVICE_UNAVAILABLE));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        server.await.unwrap();
    }
}
