use crate::indexer::types::{RawBlock, RawTransaction};
use crate::models::{
    ApplicationCallFields, AssetConfigFields, AssetFreezeFields, AssetTransferFields, Block,
    KeyRegFields, PaymentFields, Transaction, TxPayload,
};

/// Builds the block/transaction graph from a raw service block: internal
/// field naming, the per-type payload union, and each top-level transaction's
/// back-reference (as the enclosing round, not a pointer).
pub fn assemble(raw: RawBlock) -> Block {
    let round = raw.round;
    let transactions = raw
        .transactions
        .into_iter()
        .map(|tx| assemble_transaction(tx, round))
        .collect();

    Block {
        round,
        hash: None,
        parent_hash: raw.previous_block_hash,
        timestamp: raw.timestamp,
        transactions,
        rewards: raw.rewards,
        upgrade_state: raw.upgrade_state,
        upgrade_vote: raw.upgrade_vote,
        genesis_id: raw.genesis_id,
        genesis_hash: raw.genesis_hash,
    }
}

fn assemble_transaction(raw: RawTransaction, block_round: u64) -> Transaction {
    let payload = payload_from_raw(&raw);
    // Inner transactions nest without a back-reference to the outer block
    let inner_txns = raw
        .inner_txns
        .into_iter()
        .map(|inner| assemble_transaction(inner, 0))
        .collect();

    Transaction {
        id: raw.id,
        sender: raw.sender,
        group: raw.group,
        fee: raw.fee.unwrap_or(0),
        payload,
        inner_txns,
        block_round,
    }
}

// Maps the service's type tag plus per-type payload object onto the tagged
// union. An unrecognized tag falls through to Other rather than failing the
// whole block.
fn payload_from_raw(raw: &RawTransaction) -> TxPayload {
    match raw.tx_type.as_str() {
        "pay" => {
            let p = raw.payment_transaction.clone().unwrap_or_default();
            TxPayload::Payment(PaymentFields {
                receiver: p.receiver,
                amount: p.amount,
                close_remainder_to: p.close_remainder_to,
            })
        }
        "acfg" => {
            let p = raw.asset_config_transaction.clone().unwrap_or_default();
            TxPayload::AssetConfig(AssetConfigFields {
                asset_id: p.asset_id,
                params: p.params,
            })
        }
        "axfer" => {
            let p = raw.asset_transfer_transaction.clone().unwrap_or_default();
            TxPayload::AssetTransfer(AssetTransferFields {
                receiver: p.receiver,
                amount: p.amount,
                asset_id: p.asset_id,
                close_to: p.close_to,
            })
        }
        "afrz" => {
            let p = raw.asset_freeze_transaction.clone().unwrap_or_default();
            TxPayload::AssetFreeze(AssetFreezeFields {
                address: p.address,
                asset_id: p.asset_id,
                new_freeze_status: p.new_freeze_status,
            })
        }
        "keyreg" => {
            let p = raw.keyreg_transaction.clone().unwrap_or_default();
            TxPayload::KeyRegistration(KeyRegFields {
                non_participation: p.non_participation,
                vote_key: p.vote_participation_key,
            })
        }
        "appl" => {
            let p = raw.application_transaction.clone().unwrap_or_default();
            TxPayload::ApplicationCall(ApplicationCallFields {
                application_id: p.application_id,
                application_args: p.application_args,
                on_completion: p.on_completion,
                accounts: p.accounts,
            })
        }
        _ => TxPayload::Other,
    }
}
