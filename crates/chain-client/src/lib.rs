//! Chain Client
//!
//! Speaks just enough Ethereum JSON-RPC for the demo ledger screen:
//! network id, account list, balances, and a bare send-transaction.
//! Built on reqwest so the same client compiles natively (for tests)
//! and for wasm (the site itself). There is no retry and no
//! confirmation tracking; callers are expected to treat any error as
//! "chain unavailable" and fall back to their own data.

use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Wei per ether, as a float for display math.
pub const WEI_PER_ETH: f64 = 1e18;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("chain answered with error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("unexpected response shape for {method}")]
    Shape { method: &'static str },
    #[error("malformed hex quantity {0:?}")]
    Quantity(String),
}

/// What one successful connect round learns about the chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainInfo {
    pub network_id: String,
    pub accounts: Vec<String>,
    /// Balance of the first account, in ether (0 when there are no accounts).
    pub balance_eth: f64,
}

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: Value,
    id: u32,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// JSON-RPC 2.0 client bound to one endpoint.
#[derive(Debug)]
pub struct ChainClient {
    endpoint: String,
    http: reqwest::Client,
    next_id: AtomicU32,
}

impl ChainClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
            next_id: AtomicU32::new(1),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn call(&self, method: &'static str, params: Value) -> Result<Value, ChainError> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
        };
        log::debug!("[RPC] {} -> {}", method, self.endpoint);
        let response: RpcResponse = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .json()
            .await?;
        if let Some(err) = response.error {
            return Err(ChainError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        response.result.ok_or(ChainError::Shape { method })
    }

    /// `net_version`: decimal network id as a string.
    pub async fn network_id(&self) -> Result<String, ChainError> {
        let value = self.call("net_version", json!([])).await?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or(ChainError::Shape { method: "net_version" })
    }

    /// `eth_accounts`: unlocked account addresses.
    pub async fn accounts(&self) -> Result<Vec<String>, ChainError> {
        let value = self.call("eth_accounts", json!([])).await?;
        serde_json::from_value(value).map_err(|_| ChainError::Shape { method: "eth_accounts" })
    }

    /// `eth_getBalance` at the latest block, converted to ether.
    pub async fn balance(&self, address: &str) -> Result<f64, ChainError> {
        let value = self.call("eth_getBalance", json!([address, "latest"])).await?;
        let hex = value
            .as_str()
            .ok_or(ChainError::Shape { method: "eth_getBalance" })?;
        Ok(wei_to_eth(parse_quantity(hex)?))
    }

    /// `eth_sendTransaction`: returns the transaction hash.
    pub async fn send_transaction(
        &self,
        from: &str,
        to: &str,
        value_eth: f64,
    ) -> Result<String, ChainError> {
        let params = json!([{
            "from": from,
            "to": to,
            "value": eth_to_hex(value_eth),
        }]);
        let value = self.call("eth_sendTransaction", params).await?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or(ChainError::Shape { method: "eth_sendTransaction" })
    }

    /// One connect round: network id, accounts, first account's balance.
    pub async fn connect(&self) -> Result<ChainInfo, ChainError> {
        let network_id = self.network_id().await?;
        let accounts = self.accounts().await?;
        let balance_eth = match accounts.first() {
            Some(address) => self.balance(address).await?,
            None => 0.0,
        };
        Ok(ChainInfo {
            network_id,
            accounts,
            balance_eth,
        })
    }
}

/// Parse a 0x-prefixed hex quantity into wei.
pub fn parse_quantity(hex: &str) -> Result<u128, ChainError> {
    let digits = hex
        .strip_prefix("0x")
        .ok_or_else(|| ChainError::Quantity(hex.to_string()))?;
    if digits.is_empty() {
        return Err(ChainError::Quantity(hex.to_string()));
    }
    u128::from_str_radix(digits, 16).map_err(|_| ChainError::Quantity(hex.to_string()))
}

pub fn wei_to_eth(wei: u128) -> f64 {
    wei as f64 / WEI_PER_ETH
}

/// Ether to a 0x-prefixed wei quantity. Negative input clamps to zero.
pub fn eth_to_hex(eth: f64) -> String {
    let wei = (eth.max(0.0) * WEI_PER_ETH) as u128;
    format!("0x{wei:x}")
}

/// Shorten an address for table display: 0x1234...abcd. A value that
/// cannot be split on char boundaries (a node returning garbage) is
/// shown whole.
pub fn short_address(address: &str) -> String {
    if address.len() <= 12 {
        return address.to_string();
    }
    match (address.get(..6), address.get(address.len() - 4..)) {
        (Some(head), Some(tail)) => format!("{head}...{tail}"),
        _ => address.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_hex_quantities() {
        assert_eq!(parse_quantity("0x0").unwrap(), 0);
        assert_eq!(parse_quantity("0xde0b6b3a7640000").unwrap(), 1_000_000_000_000_000_000);
        assert!(parse_quantity("de0b6b3a7640000").is_err());
        assert!(parse_quantity("0x").is_err());
        assert!(parse_quantity("0xzz").is_err());
    }

    #[test]
    fn test_converts_wei_to_ether() {
        assert_eq!(wei_to_eth(1_000_000_000_000_000_000), 1.0);
        assert_eq!(wei_to_eth(0), 0.0);
        assert!((wei_to_eth(500_000_000_000_000_000) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_converts_ether_to_hex_wei() {
        assert_eq!(eth_to_hex(0.0), "0x0");
        assert_eq!(eth_to_hex(1.0), "0xde0b6b3a7640000");
        assert_eq!(eth_to_hex(-3.0), "0x0");
    }

    #[test]
    fn test_request_envelope_shape() {
        let request = RpcRequest {
            jsonrpc: "2.0",
            method: "eth_getBalance",
            params: json!(["0xabc", "latest"]),
            id: 7,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "jsonrpc": "2.0",
                "method": "eth_getBalance",
                "params": ["0xabc", "latest"],
                "id": 7,
            })
        );
    }

    #[test]
    fn test_response_error_branch_deserializes() {
        let raw = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"method not found"}}"#;
        let response: RpcResponse = serde_json::from_str(raw).unwrap();
        let err = response.error.unwrap();
        assert_eq!(err.code, -32601);
        assert_eq!(err.message, "method not found");
        assert!(response.result.is_none());
    }

    #[test]
    fn test_response_result_branch_deserializes() {
        let raw = r#"{"jsonrpc":"2.0","id":2,"result":"0x64"}"#;
        let response: RpcResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.result.unwrap(), json!("0x64"));
        assert!(response.error.is_none());
    }

    #[test]
    fn test_shortens_addresses_for_display() {
        assert_eq!(
            short_address("0x90F8bf6A479f320ead074411a4B0e7944Ea8c9C1"),
            "0x90F8...c9C1"
        );
        assert_eq!(short_address("0xabc"), "0xabc");
    }

    #[test]
    fn test_shortening_survives_non_ascii_garbage() {
        // 15 bytes, tail split at 11 lands mid-char
        assert_eq!(short_address("ॐॐॐॐॐ"), "ॐॐॐॐॐ");
        // 16 bytes, head split at 6 lands mid-char
        assert_eq!(short_address("🦀🦀🦀🦀"), "🦀🦀🦀🦀");
    }
}
