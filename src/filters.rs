use serde::{Deserialize, Serialize};

use crate::models::{Block, Transaction, TxKind, TxPayload};

/// Block-level filter. Absent fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockFilter {
    /// Match rounds where `round % modulo == 0`
    pub modulo: Option<u64>,
    pub timestamp_after: Option<i64>,
    pub timestamp_before: Option<i64>,
}

/// Transaction-level filter. Which fields apply depends on the transaction's
/// kind; a set field the kind does not expose is a mismatch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionFilter {
    pub tx_type: Option<TxKind>,
    pub sender: Option<String>,
    pub receiver: Option<String>,
    pub asset_id: Option<u64>,
    pub application_id: Option<u64>,
    /// Positional argument match; `None` at a position means don't-care,
    /// enabling selector-only matching
    pub application_args: Option<Vec<Option<String>>>,
    pub address: Option<String>,
    pub new_freeze_status: Option<bool>,
    pub non_participation: Option<bool>,
}

/// No filter means match-everything. Never errors for well-formed input.
pub fn matches_block(block: &Block, filter: Option<&BlockFilter>) -> bool {
    let filter = match filter {
        Some(f) => f,
        None => return true,
    };

    // A zero modulo divides nothing; treat it as no-match rather than panic
    filter.modulo.map_or(true, |m| m != 0 && block.round % m == 0)
        && filter.timestamp_after.map_or(true, |t| block.timestamp >= t)
        && filter.timestamp_before.map_or(true, |t| block.timestamp <= t)
}

// The fields a given transaction kind actually exposes to filtering.
// Building this through a match over the payload union keeps field access
// compile-checked per kind.
#[derive(Default)]
struct Exposed<'a> {
    sender: Option<&'a str>,
    receiver: Option<&'a str>,
    asset_id: Option<u64>,
    application_id: Option<u64>,
    application_args: Option<&'a [String]>,
    address: Option<&'a str>,
    new_freeze_status: Option<bool>,
    non_participation: Option<bool>,
}

fn exposed_fields(tx: &Transaction) -> Exposed<'_> {
    match &tx.payload {
        TxPayload::Payment(p) => Exposed {
            sender: Some(&tx.sender),
            receiver: Some(&p.receiver),
            ..Default::default()
        },
        TxPayload::AssetConfig(p) => Exposed {
            sender: Some(&tx.sender),
            asset_id: p.asset_id,
            ..Default::default()
        },
        TxPayload::AssetTransfer(p) => Exposed {
            sender: Some(&tx.sender),
            receiver: Some(&p.receiver),
            asset_id: Some(p.asset_id),
            ..Default::default()
        },
        TxPayload::AssetFreeze(p) => Exposed {
            sender: Some(&tx.sender),
            asset_id: Some(p.asset_id),
            address: Some(&p.address),
            new_freeze_status: Some(p.new_freeze_status),
            ..Default::default()
        },
        TxPayload::KeyRegistration(p) => Exposed {
            sender: Some(&tx.sender),
            non_participation: Some(p.non_participation),
            ..Default::default()
        },
        TxPayload::ApplicationCall(p) => Exposed {
            sender: Some(&tx.sender),
            application_id: Some(p.application_id),
            application_args: Some(&p.application_args),
            ..Default::default()
        },
        // Fallback kind exposes nothing; only a bare type filter can match
        TxPayload::Other => Exposed::default(),
    }
}

/// No filter means match-everything. A filter field left unset is skipped,
/// never a mismatch.
pub fn matches_transaction(tx: &Transaction, filter: Option<&TransactionFilter>) -> bool {
    let filter = match filter {
        Some(f) => f,
        None => return true,
    };

    // A type tag that disagrees ends the evaluation outright
    if let Some(kind) = filter.tx_type {
        if kind != tx.kind() {
            return false;
        }
    }

    let exposed = exposed_fields(tx);

    check_str(&filter.sender, exposed.sender)
        && check_str(&filter.receiver, exposed.receiver)
        && check_eq(&filter.asset_id, exposed.asset_id)
        && check_eq(&filter.application_id, exposed.application_id)
        && check_str(&filter.address, exposed.address)
        && check_eq(&filter.new_freeze_status, exposed.new_freeze_status)
        && check_eq(&filter.non_participation, exposed.non_participation)
        && check_args(&filter.application_args, exposed.application_args)
}

// Unset filter field: skip. Set but not exposed by this kind: mismatch.
fn check_eq<T: PartialEq + Copy>(want: &Option<T>, actual: Option<T>) -> bool {
    match want {
        None => true,
        Some(w) => actual == Some(*w),
    }
}

fn check_str(want: &Option<String>, actual: Option<&str>) -> bool {
    match want {
        None => true,
        Some(w) => actual == Some(w.as_str()),
    }
}

// Positional comparison: each set filter position must equal the argument at
// that position; None positions match anything, including a missing argument
fn check_args(want: &Option<Vec<Option<String>>>, actual: Option<&[String]>) -> bool {
    let want = match want {
        None => return true,
        Some(w) => w,
    };
    let actual = match actual {
        None => return false,
        Some(a) => a,
    };
    want.iter().enumerate().all(|(i, slot)| match slot {
        None => true,
        Some(value) => actual.get(i) == Some(value),
    })
}
