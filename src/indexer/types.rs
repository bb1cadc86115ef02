use serde::{Deserialize, Serialize};
use serde_json::Value;

// Wire DTOs for the remote ledger-indexing service. The service uses
// kebab-case keys throughout; serde maps them (arrays and nested objects
// included) onto the snake_case internal convention.

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawBlock {
    pub round: u64,
    pub previous_block_hash: String,
    pub timestamp: i64,
    #[serde(default)]
    pub transactions: Vec<RawTransaction>,
    #[serde(default)]
    pub rewards: Option<Value>,
    #[serde(default)]
    pub upgrade_state: Option<Value>,
    #[serde(default)]
    pub upgrade_vote: Option<Value>,
    #[serde(default)]
    pub genesis_id: Option<String>,
    #[serde(default)]
    pub genesis_hash: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawTransaction {
    #[serde(default)]
    pub id: Option<String>,
    pub tx_type: String,
    pub sender: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub fee: Option<u64>,
    #[serde(default)]
    pub payment_transaction: Option<RawPayment>,
    #[serde(default)]
    pub asset_config_transaction: Option<RawAssetConfig>,
    #[serde(default)]
    pub asset_transfer_transaction: Option<RawAssetTransfer>,
    #[serde(default)]
    pub asset_freeze_transaction: Option<RawAssetFreeze>,
    #[serde(default)]
    pub keyreg_transaction: Option<RawKeyReg>,
    #[serde(default)]
    pub application_transaction: Option<RawApplicationCall>,
    #[serde(default)]
    pub inner_txns: Vec<RawTransaction>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawPayment {
    pub receiver: String,
    #[serde(default)]
    pub amount: u64,
    #[serde(default)]
    pub close_remainder_to: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawAssetConfig {
    #[serde(default)]
    pub asset_id: Option<u64>,
    #[serde(default)]
    pub params: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawAssetTransfer {
    pub receiver: String,
    #[serde(default)]
    pub amount: u64,
    pub asset_id: u64,
    #[serde(default)]
    pub close_to: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawAssetFreeze {
    pub address: String,
    pub asset_id: u64,
    #[serde(default)]
    pub new_freeze_status: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawKeyReg {
    #[serde(default)]
    pub non_participation: bool,
    #[serde(default)]
    pub vote_participation_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawApplicationCall {
    #[serde(default)]
    pub application_id: u64,
    #[serde(default)]
    pub application_args: Vec<String>,
    #[serde(default)]
    pub on_completion: Option<String>,
    #[serde(default)]
    pub accounts: Vec<String>,
}

/// One page of a paginated transaction search. The service may report a
/// continuation token even on the final page; emptiness is the terminator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TransactionPage {
    #[serde(default)]
    pub transactions: Vec<RawTransaction>,
    #[serde(default)]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Health {
    pub round: u64,
}
