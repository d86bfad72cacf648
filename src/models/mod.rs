pub mod amount;
pub mod asset;
pub mod token;
pub mod transaction;

pub use amount::Amount;
pub use asset::{build_asset_id, parse_asset_id};
pub use token::Token;
pub use transaction::{
    clean_memos, filter_unique_id, retain_kinds, sort_by_date, ContractCall, Direction, Metadata,
    Status, Swap, SwapLeg, Transfer, TransferNft, Tx, TxKind, TxOutput, TxPage,
};
