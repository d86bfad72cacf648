//! Normalized, chain-agnostic transaction record
//!
//! Producers fill a [`Tx`] per chain; everything consumers need to render a
//! wallet view (participants, direction, UTXO value) is derived here without
//! any per-chain knowledge.

use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use tracing::{debug, warn};

use super::amount::Amount;
use crate::validation::{sanitize_memo, ValidationError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Completed,
    Pending,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Outgoing,
    Incoming,
    #[serde(rename = "yourself")]
    SelfTransfer,
}

/// Transaction category. Unknown text from a producer becomes `Undefined`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxKind {
    Transfer,
    TransferNft,
    ContractCall,
    Swap,
    StakeDelegate,
    StakeUndelegate,
    StakeRedelegate,
    StakeClaimRewards,
    StakeCompound,
    #[default]
    #[serde(other)]
    Undefined,
}

impl TxKind {
    /// Kinds with modeled address/direction rules.
    pub const SUPPORTED: [TxKind; 9] = [
        TxKind::Transfer,
        TxKind::TransferNft,
        TxKind::ContractCall,
        TxKind::Swap,
        TxKind::StakeDelegate,
        TxKind::StakeUndelegate,
        TxKind::StakeRedelegate,
        TxKind::StakeClaimRewards,
        TxKind::StakeCompound,
    ];

    pub fn is_staking(&self) -> bool {
        matches!(
            self,
            TxKind::StakeDelegate
                | TxKind::StakeUndelegate
                | TxKind::StakeRedelegate
                | TxKind::StakeClaimRewards
                | TxKind::StakeCompound
        )
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TxKind::Transfer => "transfer",
            TxKind::TransferNft => "transfer_nft",
            TxKind::ContractCall => "contract_call",
            TxKind::Swap => "swap",
            TxKind::StakeDelegate => "stake_delegate",
            TxKind::StakeUndelegate => "stake_undelegate",
            TxKind::StakeRedelegate => "stake_redelegate",
            TxKind::StakeClaimRewards => "stake_claim_rewards",
            TxKind::StakeCompound => "stake_compound",
            TxKind::Undefined => "undefined",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    pub address: String,
    pub value: Amount,
}

impl TxOutput {
    pub fn new(address: impl Into<String>, value: impl Into<Amount>) -> Self {
        Self {
            address: address.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transfer {
    pub asset: String,
    pub value: Amount,
    pub symbol: String,
    pub decimals: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferNft {
    pub asset: String,
    pub name: String,
    pub contract: String,
    pub token_id: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractCall {
    pub asset: String,
    pub value: Amount,
    pub input: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapLeg {
    pub asset: String,
    pub value: Amount,
    pub symbol: String,
    pub decimals: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Swap {
    pub from: SwapLeg,
    pub to: SwapLeg,
}

/// Kind-specific payload. Which variant a record carries is decided by its
/// `kind`, never by the payload's shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Metadata {
    Transfer(Transfer),
    TransferNft(TransferNft),
    ContractCall(ContractCall),
    Swap(Swap),
    /// Payload of an `Undefined` transaction, kept verbatim.
    Unknown(Value),
    #[default]
    None,
}

impl Metadata {
    fn for_kind(kind: TxKind, raw: Option<Value>) -> Result<Self, serde_json::Error> {
        let value = match raw {
            None | Some(Value::Null) => return Ok(Metadata::None),
            Some(value) => value,
        };

        let metadata = match kind {
            TxKind::Transfer
            | TxKind::StakeDelegate
            | TxKind::StakeUndelegate
            | TxKind::StakeRedelegate
            | TxKind::StakeClaimRewards
            | TxKind::StakeCompound => Metadata::Transfer(serde_json::from_value(value)?),
            TxKind::TransferNft => Metadata::TransferNft(serde_json::from_value(value)?),
            TxKind::ContractCall => Metadata::ContractCall(serde_json::from_value(value)?),
            TxKind::Swap => Metadata::Swap(serde_json::from_value(value)?),
            TxKind::Undefined => Metadata::Unknown(value),
        };
        Ok(metadata)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTx")]
pub struct Tx {
    pub id: String,
    pub coin: u32,
    pub from: String,
    pub to: String,
    pub fee: Amount,
    pub date: i64,
    pub block: u64,
    pub status: Status,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
    pub sequence: u64,
    #[serde(rename = "type")]
    pub kind: TxKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<TxOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<TxOutput>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub memo: String,
    pub metadata: Metadata,
}

/// Wire form; metadata stays raw until `type` is known.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTx {
    id: String,
    coin: u32,
    from: String,
    to: String,
    fee: Amount,
    date: i64,
    block: u64,
    status: Status,
    error: String,
    sequence: u64,
    #[serde(rename = "type")]
    kind: TxKind,
    direction: Option<Direction>,
    inputs: Vec<TxOutput>,
    outputs: Vec<TxOutput>,
    memo: String,
    metadata: Option<Value>,
}

impl TryFrom<RawTx> for Tx {
    type Error = serde_json::Error;

    fn try_from(raw: RawTx) -> Result<Self, Self::Error> {
        let metadata = Metadata::for_kind(raw.kind, raw.metadata)?;

        Ok(Tx {
            id: raw.id,
            coin: raw.coin,
            from: raw.from,
            to: raw.to,
            fee: raw.fee,
            date: raw.date,
            block: raw.block,
            status: raw.status,
            error: raw.error,
            sequence: raw.sequence,
            kind: raw.kind,
            direction: raw.direction,
            inputs: raw.inputs,
            outputs: raw.outputs,
            memo: raw.memo,
            metadata,
        })
    }
}

impl Tx {
    /// Records from UTXO chains carry inputs/outputs instead of from/to.
    pub fn is_utxo(&self) -> bool {
        !self.inputs.is_empty() || !self.outputs.is_empty()
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date, 0)
    }

    pub fn clean_memo(&mut self) {
        self.memo = sanitize_memo(&self.memo);
    }

    /// Addresses that took part in this transaction.
    ///
    /// Staking is reported from the acting account only; kinds without a
    /// modeled rule index no addresses at all.
    pub fn addresses(&self) -> BTreeSet<String> {
        if self.is_utxo() && self.kind == TxKind::Transfer {
            return self
                .inputs
                .iter()
                .chain(self.outputs.iter())
                .map(|output| output.address.clone())
                .collect();
        }

        let participants: Vec<&str> = match self.kind {
            TxKind::Transfer | TxKind::TransferNft | TxKind::ContractCall | TxKind::Swap => {
                vec![self.from.as_str(), self.to.as_str()]
            }
            TxKind::StakeDelegate
            | TxKind::StakeUndelegate
            | TxKind::StakeRedelegate
            | TxKind::StakeClaimRewards
            | TxKind::StakeCompound => vec![self.from.as_str()],
            TxKind::Undefined => Vec::new(),
        };

        participants
            .into_iter()
            .filter(|address| !address.is_empty())
            .map(|address| address.to_string())
            .collect()
    }

    /// Direction of this transaction as seen by `address`.
    ///
    /// `address` is expected to be one of [`Tx::addresses`]; any other
    /// address is reported as `Incoming`.
    pub fn direction_for(&self, address: &str) -> Direction {
        if let Some(direction) = self.direction {
            return direction;
        }

        if self.is_utxo() {
            let spent = self.inputs.iter().any(|input| input.address == address);
            let received = self.outputs.iter().any(|output| output.address == address);

            return match (spent, received) {
                (true, true) => Direction::SelfTransfer,
                (true, false) => Direction::Outgoing,
                (false, true) => Direction::Incoming,
                (false, false) => {
                    debug!("Address {} is not a participant of utxo tx {}", address, self.id);
                    Direction::Incoming
                }
            };
        }

        match self.kind {
            TxKind::StakeUndelegate | TxKind::StakeClaimRewards => {
                if address == self.to {
                    Direction::Incoming
                } else {
                    Direction::Outgoing
                }
            }
            TxKind::StakeRedelegate | TxKind::StakeDelegate => {
                if address == self.from {
                    Direction::Outgoing
                } else {
                    Direction::Incoming
                }
            }
            _ => {
                if address == self.from && address == self.to {
                    Direction::SelfTransfer
                } else if address == self.from {
                    Direction::Outgoing
                } else if address == self.to {
                    Direction::Incoming
                } else {
                    debug!("Address {} is not a participant of tx {}", address, self.id);
                    Direction::Incoming
                }
            }
        }
    }

    /// Net value a UTXO transaction moved for `address`.
    ///
    /// A spender gets what left for other addresses, or the whole output
    /// total when every output comes back to it. A pure receiver gets the
    /// sum of its outputs.
    pub fn utxo_value_for(&self, address: &str) -> Result<Amount, ValidationError> {
        let inputs = self.parse_values(&self.inputs)?;
        let outputs = self.parse_values(&self.outputs)?;

        let is_spender = inputs.iter().any(|(input_address, _)| *input_address == address);

        let value = if is_spender {
            let returns_all = outputs.iter().all(|(output_address, _)| *output_address == address);
            outputs
                .iter()
                .filter(|(output_address, _)| returns_all || *output_address != address)
                .fold(BigDecimal::zero(), |acc, (_, value)| acc + value)
        } else {
            outputs
                .iter()
                .filter(|(output_address, _)| *output_address == address)
                .fold(BigDecimal::zero(), |acc, (_, value)| acc + value)
        };

        Ok(Amount::from(value))
    }

    fn parse_values<'a>(
        &self,
        entries: &'a [TxOutput],
    ) -> Result<Vec<(&'a str, BigDecimal)>, ValidationError> {
        entries
            .iter()
            .map(|entry| match entry.value.to_decimal() {
                Ok(value) => Ok((entry.address.as_str(), value)),
                Err(e) => {
                    warn!("Tx {} has malformed value for {}: {}", self.id, entry.address, e);
                    Err(e)
                }
            })
            .collect()
    }
}

/// Sanitize every memo before records leave the core.
pub fn clean_memos(txs: &mut [Tx]) {
    for tx in txs.iter_mut() {
        tx.clean_memo();
    }
}

/// Drop repeated ids, keeping the first record seen for each.
pub fn filter_unique_id(txs: Vec<Tx>) -> Vec<Tx> {
    let mut seen = HashSet::new();
    txs.into_iter()
        .filter(|tx| seen.insert(tx.id.clone()))
        .collect()
}

/// Newest first.
pub fn sort_by_date(txs: &mut [Tx]) {
    txs.sort_by(|a, b| b.date.cmp(&a.date));
}

pub fn retain_kinds(txs: &mut Vec<Tx>, kinds: &[TxKind]) {
    txs.retain(|tx| kinds.contains(&tx.kind));
}

/// Page of transactions as served to API consumers.
#[derive(Debug, Clone, Serialize)]
pub struct TxPage {
    pub total: usize,
    pub docs: Vec<Tx>,
    pub status: bool,
}

impl From<Vec<Tx>> for TxPage {
    fn from(docs: Vec<Tx>) -> Self {
        Self {
            total: docs.len(),
            docs,
            status: true,
        }
    }
}
