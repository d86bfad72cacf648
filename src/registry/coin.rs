//! Chain identifiers (SLIP-44 coin indexes) the registry knows about

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const BITCOIN: u32 = 0;
pub const ETHEREUM: u32 = 60;
pub const CLASSIC: u32 = 61;
pub const STELLAR: u32 = 148;
pub const POA: u32 = 178;
pub const EOS: u32 = 194;
pub const TRON: u32 = 195;
pub const ALGORAND: u32 = 283;
pub const TERRA: u32 = 330;
pub const KAVA: u32 = 459;
pub const OASIS: u32 = 474;
pub const THETA: u32 = 500;
pub const SOLANA: u32 = 501;
pub const ELROND: u32 = 508;
pub const TON: u32 = 607;
pub const APTOS: u32 = 637;
pub const BINANCE: u32 = 714;
pub const SUI: u32 = 784;
pub const VECHAIN: u32 = 818;
pub const CALLISTO: u32 = 820;
pub const NEO: u32 = 888;
pub const TOMOCHAIN: u32 = 889;
pub const POLYGON: u32 = 966;
pub const OKC: u32 = 996;
pub const THUNDERTOKEN: u32 = 1001;
pub const HARMONY: u32 = 1023;
pub const ONTOLOGY: u32 = 1024;
pub const MOONBEAM: u32 = 1284;
pub const GOCHAIN: u32 = 6060;
pub const NULS: u32 = 8964;
pub const METER: u32 = 18000;
pub const CELO: u32 = 52752;
pub const METIS: u32 = 1001088;
pub const WANCHAIN: u32 = 5718350;
pub const WAVES: u32 = 5741564;
pub const CRONOS: u32 = 10000025;
pub const OPTIMISM: u32 = 10000070;
pub const XDAI: u32 = 10000100;
pub const FANTOM: u32 = 10000250;
pub const BOBA: u32 = 10000288;
pub const KCC: u32 = 10000321;
pub const ZKSYNC: u32 = 10000324;
pub const HECO: u32 = 10000553;
pub const POLYGONZKEVM: u32 = 10001101;
pub const MOONRIVER: u32 = 10001285;
pub const RONIN: u32 = 10002020;
pub const KAVAEVM: u32 = 10002222;
pub const KLAYTN: u32 = 10008217;
pub const AVALANCHEC: u32 = 10009000;
pub const ARBITRUM: u32 = 10042221;
pub const SMARTCHAIN: u32 = 20000714;
pub const EVMOS: u32 = 20009001;
pub const STRIDE: u32 = 30000118;
pub const NEUTRON: u32 = 40000118;
pub const AURORA: u32 = 1323161554;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain {
    pub id: u32,
    pub handle: &'static str,
    pub evm: bool,
}

const fn evm(id: u32, handle: &'static str) -> Chain {
    Chain { id, handle, evm: true }
}

const fn native(id: u32, handle: &'static str) -> Chain {
    Chain { id, handle, evm: false }
}

pub const CHAINS: &[Chain] = &[
    native(BITCOIN, "bitcoin"),
    evm(ETHEREUM, "ethereum"),
    evm(CLASSIC, "classic"),
    native(STELLAR, "stellar"),
    evm(POA, "poa"),
    native(EOS, "eos"),
    native(TRON, "tron"),
    native(ALGORAND, "algorand"),
    native(TERRA, "terra"),
    native(KAVA, "kava"),
    native(OASIS, "oasis"),
    native(THETA, "theta"),
    native(SOLANA, "solana"),
    native(ELROND, "elrond"),
    native(TON, "ton"),
    native(APTOS, "aptos"),
    native(BINANCE, "binance"),
    native(SUI, "sui"),
    native(VECHAIN, "vechain"),
    evm(CALLISTO, "callisto"),
    native(NEO, "neo"),
    evm(TOMOCHAIN, "tomochain"),
    evm(POLYGON, "polygon"),
    evm(OKC, "okc"),
    evm(THUNDERTOKEN, "thundertoken"),
    native(HARMONY, "harmony"),
    native(ONTOLOGY, "ontology"),
    evm(MOONBEAM, "moonbeam"),
    evm(GOCHAIN, "gochain"),
    native(NULS, "nuls"),
    evm(METER, "meter"),
    evm(CELO, "celo"),
    evm(METIS, "metis"),
    evm(WANCHAIN, "wanchain"),
    native(WAVES, "waves"),
    evm(CRONOS, "cronos"),
    evm(OPTIMISM, "optimism"),
    evm(XDAI, "xdai"),
    evm(FANTOM, "fantom"),
    evm(BOBA, "boba"),
    evm(KCC, "kcc"),
    evm(ZKSYNC, "zksync"),
    evm(HECO, "heco"),
    evm(POLYGONZKEVM, "polygonzkevm"),
    evm(MOONRIVER, "moonriver"),
    evm(RONIN, "ronin"),
    evm(KAVAEVM, "kavaevm"),
    evm(KLAYTN, "klaytn"),
    evm(AVALANCHEC, "avalanchec"),
    evm(ARBITRUM, "arbitrum"),
    evm(SMARTCHAIN, "smartchain"),
    evm(EVMOS, "evmos"),
    native(STRIDE, "stride"),
    native(NEUTRON, "neutron"),
    evm(AURORA, "aurora"),
];

static BY_ID: Lazy<HashMap<u32, Chain>> = Lazy::new(|| CHAINS.iter().map(|chain| (chain.id, *chain)).collect());

pub fn chain(id: u32) -> Option<Chain> {
    BY_ID.get(&id).copied()
}

pub fn is_evm(id: u32) -> bool {
    chain(id).is_some_and(|chain| chain.evm)
}
