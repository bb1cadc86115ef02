use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An assembled ledger block. `hash` stays `None` until the hash resolver has
/// derived it from the next block's back-reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub round: u64,
    #[serde(default)]
    pub hash: Option<String>,
    pub parent_hash: String,
    pub timestamp: i64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    // Opaque reward/upgrade metadata passed through from the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewards: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_state: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_vote: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genesis_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genesis_hash: Option<String>,
}

impl Block {
    /// Header view for finality/reindex logic: the scalar block fields without
    /// the transaction list.
    pub fn header(&self) -> BlockHeader {
        BlockHeader {
            round: self.round,
            hash: self.hash.clone(),
            parent_hash: self.parent_hash.clone(),
            timestamp: self.timestamp,
        }
    }

    /// All top-level transactions sharing `group`, in chain order.
    pub fn transactions_in_group(&self, group: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|tx| tx.group.as_deref() == Some(group))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockHeader {
    pub round: u64,
    pub hash: Option<String>,
    pub parent_hash: String,
    pub timestamp: i64,
}

/// A transaction inside an assembled block. The back-reference to the
/// enclosing block is carried as its round, not a pointer, and is skipped
/// during serialization so either side of the cycle serializes independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub id: Option<String>,
    pub sender: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub fee: u64,
    pub payload: TxPayload,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inner_txns: Vec<Transaction>,
    // Round of the enclosing block; 0 and meaningless for inner transactions
    #[serde(skip)]
    pub block_round: u64,
}

impl Transaction {
    pub fn kind(&self) -> TxKind {
        self.payload.kind()
    }
}

/// Closed transaction-type enumeration as tagged by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxKind {
    #[serde(rename = "pay")]
    Payment,
    #[serde(rename = "acfg")]
    AssetConfig,
    #[serde(rename = "axfer")]
    AssetTransfer,
    #[serde(rename = "afrz")]
    AssetFreeze,
    #[serde(rename = "keyreg")]
    KeyRegistration,
    #[serde(rename = "appl")]
    ApplicationCall,
    #[serde(rename = "other")]
    Other,
}

/// Per-type payload union. Each variant exposes only the fields that exist
/// for its transaction kind, so filter evaluation is a compile-checked match
/// rather than a stringly field-path lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "fields", rename_all = "kebab-case")]
pub enum TxPayload {
    Payment(PaymentFields),
    AssetConfig(AssetConfigFields),
    AssetTransfer(AssetTransferFields),
    AssetFreeze(AssetFreezeFields),
    KeyRegistration(KeyRegFields),
    ApplicationCall(ApplicationCallFields),
    Other,
}

impl TxPayload {
    pub fn kind(&self) -> TxKind {
        match self {
            TxPayload::Payment(_) => TxKind::Payment,
            TxPayload::AssetConfig(_) => TxKind::AssetConfig,
            TxPayload::AssetTransfer(_) => TxKind::AssetTransfer,
            TxPayload::AssetFreeze(_) => TxKind::AssetFreeze,
            TxPayload::KeyRegistration(_) => TxKind::KeyRegistration,
            TxPayload::ApplicationCall(_) => TxKind::ApplicationCall,
            TxPayload::Other => TxKind::Other,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentFields {
    pub receiver: String,
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_remainder_to: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetConfigFields {
    // None on asset creation, where the id is assigned by the ledger
    #[serde(default)]
    pub asset_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetTransferFields {
    pub receiver: String,
    pub amount: u64,
    pub asset_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_to: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetFreezeFields {
    pub address: String,
    pub asset_id: u64,
    pub new_freeze_status: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyRegFields {
    #[serde(default)]
    pub non_participation: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationCallFields {
    pub application_id: u64,
    #[serde(default)]
    pub application_args: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_completion: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accounts: Vec<String>,
}
