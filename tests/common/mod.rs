#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use roundbus::error::ApiError;
use roundbus::indexer::types::{RawApplicationCall, RawPayment};
use roundbus::indexer::{Health, IndexerApi, RawBlock, RawTransaction, TransactionPage};

// In-memory stand-in for the remote ledger-indexing service, with call
// accounting so tests can assert on network traffic.
pub struct MockIndexer {
    blocks: Mutex<HashMap<u64, RawBlock>>,
    oversized: HashSet<u64>,
    chain_round: AtomicU64,
    // Block revealed (and chain advanced) once health has been polled
    // this many times, simulating the chain tip catching up
    reveal: Mutex<Option<(u64, RawBlock)>>,
    fail_search_at_call: Option<u64>,
    pub lookup_calls: Mutex<Vec<u64>>,
    pub header_calls: Mutex<Vec<u64>>,
    pub search_calls: AtomicU64,
    pub health_calls: AtomicU64,
}

impl MockIndexer {
    pub fn new(chain_round: u64) -> Self {
        MockIndexer {
            blocks: Mutex::new(HashMap::new()),
            oversized: HashSet::new(),
            chain_round: AtomicU64::new(chain_round),
            reveal: Mutex::new(None),
            fail_search_at_call: None,
            lookup_calls: Mutex::new(Vec::new()),
            header_calls: Mutex::new(Vec::new()),
            search_calls: AtomicU64::new(0),
            health_calls: AtomicU64::new(0),
        }
    }

    pub fn with_block(self, block: RawBlock) -> Self {
        self.blocks.lock().unwrap().insert(block.round, block);
        self
    }

    pub fn with_oversized(mut self, round: u64) -> Self {
        self.oversized.insert(round);
        self
    }

    pub fn reveal_after_health_calls(self, calls: u64, block: RawBlock) -> Self {
        *self.reveal.lock().unwrap() = Some((calls, block));
        self
    }

    pub fn failing_search_at(mut self, call: u64) -> Self {
        self.fail_search_at_call = Some(call);
        self
    }

    pub fn lookups_for(&self, round: u64) -> usize {
        self.lookup_calls
            .lock()
            .unwrap()
            .iter()
            .filter(|r| **r == round)
            .count()
    }
}

#[async_trait]
impl IndexerApi for MockIndexer {
    async fn lookup_block(&self, round: u64) -> Result<RawBlock, ApiError> {
        self.lookup_calls.lock().unwrap().push(round);
        if self.oversized.contains(&round) {
            return Err(ApiError::new(
                "IndexerHttpError",
                format!("searching for round {}: result limit exceeded", round),
            ));
        }
        self.blocks
            .lock()
            .unwrap()
            .get(&round)
            .cloned()
            .ok_or_else(|| {
                ApiError::with_status(
                    "IndexerHttpError",
                    format!("no blocks found for round {}", round),
                    404,
                )
            })
    }

    async fn lookup_block_header(&self, round: u64) -> Result<RawBlock, ApiError> {
        self.header_calls.lock().unwrap().push(round);
        let blocks = self.blocks.lock().unwrap();
        let block = blocks.get(&round).ok_or_else(|| {
            ApiError::with_status(
                "IndexerHttpError",
                format!("no blocks found for round {}", round),
                404,
            )
        })?;
        let mut header = block.clone();
        header.transactions = Vec::new();
        Ok(header)
    }

    async fn search_transactions(
        &self,
        round: u64,
        limit: u64,
        next: Option<&str>,
    ) -> Result<TransactionPage, ApiError> {
        let call = self.search_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_search_at_call == Some(call) {
            return Err(ApiError::new(
                "RequestError",
                "disconnected from indexer mid-pagination",
            ));
        }

        let blocks = self.blocks.lock().unwrap();
        let all = blocks
            .get(&round)
            .map(|b| b.transactions.clone())
            .unwrap_or_default();
        let start: usize = next.map(|t| t.parse().unwrap()).unwrap_or(0);
        let end = (start + limit as usize).min(all.len());
        let transactions = if start < all.len() {
            all[start..end].to_vec()
        } else {
            Vec::new()
        };

        // The real service reports a continuation token even on the final
        // page; emptiness is the only terminator
        Ok(TransactionPage {
            transactions,
            next_token: Some(end.to_string()),
        })
    }

    async fn health(&self) -> Result<Health, ApiError> {
        let calls = self.health_calls.fetch_add(1, Ordering::SeqCst) + 1;
        let mut reveal = self.reveal.lock().unwrap();
        if let Some((after, block)) = reveal.take() {
            if calls >= after {
                self.chain_round.fetch_max(block.round, Ordering::SeqCst);
                self.blocks.lock().unwrap().insert(block.round, block);
            } else {
                *reveal = Some((after, block));
            }
        }
        Ok(Health {
            round: self.chain_round.load(Ordering::SeqCst),
        })
    }
}

// Raw-side builders

pub fn raw_block(round: u64, parent_hash: &str, timestamp: i64) -> RawBlock {
    RawBlock {
        round,
        previous_block_hash: parent_hash.to_string(),
        timestamp,
        transactions: Vec::new(),
        rewards: None,
        upgrade_state: None,
        upgrade_vote: None,
        genesis_id: Some("testnet-v1.0".to_string()),
        genesis_hash: None,
    }
}

pub fn raw_pay_tx(id: &str, sender: &str, receiver: &str, amount: u64) -> RawTransaction {
    RawTransaction {
        id: Some(id.to_string()),
        tx_type: "pay".to_string(),
        sender: sender.to_string(),
        group: None,
        fee: Some(1000),
        payment_transaction: Some(RawPayment {
            receiver: receiver.to_string(),
            amount,
            close_remainder_to: None,
        }),
        asset_config_transaction: None,
        asset_transfer_transaction: None,
        asset_freeze_transaction: None,
        keyreg_transaction: None,
        application_transaction: None,
        inner_txns: Vec::new(),
    }
}

pub fn raw_app_tx(id: &str, sender: &str, app_id: u64, args: &[&str]) -> RawTransaction {
    RawTransaction {
        id: Some(id.to_string()),
        tx_type: "appl".to_string(),
        sender: sender.to_string(),
        group: None,
        fee: Some(1000),
        payment_transaction: None,
        asset_config_transaction: None,
        asset_transfer_transaction: None,
        asset_freeze_transaction: None,
        keyreg_transaction: None,
        application_transaction: Some(RawApplicationCall {
            application_id: app_id,
            application_args: args.iter().map(|a| a.to_string()).collect(),
            on_completion: Some("noop".to_string()),
            accounts: Vec::new(),
        }),
        inner_txns: Vec::new(),
    }
}

pub fn grouped(mut tx: RawTransaction, group: &str) -> RawTransaction {
    tx.group = Some(group.to_string());
    tx
}
