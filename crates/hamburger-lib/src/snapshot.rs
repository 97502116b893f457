//! JSON snapshots of contract tables.
//!
//! A snapshot maps each contract account to the tables it owns:
//!
//! ```json
//! {
//!   "hamburgerswp": { "pairs": [], "config": null, "deposits": [] },
//!   "hbgtrademine": { "pools": [] }
//! }
//! ```
//!
//! [`ChainSnapshot::to_state`] picks the swap tables and the pool table from
//! the accounts named in a [`LibraryConfig`], so a dump taken from a test
//! deployment under different account names reads the same way.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use hamburger_core::asset::Name;
use hamburger_core::state::MemoryState;
use hamburger_core::types::{DepositRow, GlobalRow, PairRow, PoolRow};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::LibraryConfig;
use crate::error::SnapshotError;

/// The tables one contract account owns. Absent tables are empty.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ContractTables {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pairs: Vec<PairRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<GlobalRow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pools: Vec<PoolRow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deposits: Vec<DepositRow>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct ChainSnapshot {
    contracts: BTreeMap<Name, ContractTables>,
}

impl ChainSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a snapshot file.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let json = fs::read_to_string(path)?;
        let snapshot = Self::from_json(&json)?;
        debug!(path = %path.display(), contracts = snapshot.contracts.len(), "read snapshot");
        Ok(snapshot)
    }

    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn tables(&self, contract: &Name) -> Option<&ContractTables> {
        self.contracts.get(contract)
    }

    /// Tables for `contract`, created empty if missing.
    pub fn tables_mut(&mut self, contract: Name) -> &mut ContractTables {
        self.contracts.entry(contract).or_default()
    }

    /// Build an in-memory reader from the accounts named in `config`.
    ///
    /// Tables owned by other accounts are ignored. A missing account is
    /// treated as empty tables. Two rows with the same primary key in one
    /// table are rejected.
    pub fn to_state(&self, config: &LibraryConfig) -> Result<MemoryState, SnapshotError> {
        let mut state = MemoryState::new();

        match self.tables(&config.swap_contract) {
            Some(swap) => {
                for pair in &swap.pairs {
                    if state.insert_pair(pair.clone()).is_some() {
                        return Err(duplicate(&config.swap_contract, PairRow::TABLE, pair.id));
                    }
                }
                if let Some(global) = swap.config {
                    state.set_config(global);
                }
                for deposit in &swap.deposits {
                    if state.insert_deposit(deposit.clone()).is_some() {
                        return Err(duplicate(&config.swap_contract, DepositRow::TABLE, &deposit.owner));
                    }
                }
            }
            None => warn!(contract = %config.swap_contract, "snapshot has no swap tables"),
        }

        match self.tables(&config.mine_contract) {
            Some(mine) => {
                for pool in &mine.pools {
                    if state.insert_pool(pool.clone()).is_some() {
                        return Err(duplicate(&config.mine_contract, PoolRow::TABLE, pool.pair_id));
                    }
                }
            }
            None => warn!(contract = %config.mine_contract, "snapshot has no mining tables"),
        }

        debug!(
            pairs = state.pair_count(),
            pools = state.pool_count(),
            deposits = state.deposit_count(),
            "snapshot state ready"
        );
        Ok(state)
    }
}

fn duplicate(contract: &Name, table: &'static str, key: impl ToString) -> SnapshotError {
    SnapshotError::DuplicateKey {
        contract: contract.to_string(),
        table,
        key: key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hamburger_core::traits::StateReader;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "hamburgerswp": {
            "pairs": [{
                "id": 12,
                "code": "HBGAAB",
                "token0": { "sym": "4,EOS", "contract": "eosio.token" },
                "token1": { "sym": "4,USDT", "contract": "tethertether" },
                "reserve0": "4585193.1234 EOS",
                "reserve1": "12568203.3533 USDT",
                "total_liquidity": 1000000,
                "last_update_time": 1600000000,
                "created_time": 1590000000
            }],
            "config": { "contract_status": 1, "mine_status": 1, "trade_fee": 25, "protocol_fee": 5 },
            "deposits": [{ "owner": "alice", "quantity0": "1.0000 EOS", "quantity1": "2.0000 USDT" }]
        },
        "hbgtrademine": {
            "pools": [{
                "pair_id": 12,
                "weight": 1.0,
                "balance": "1.000000 HBG",
                "issued": "0.000000 HBG",
                "last_issue_time": 1600000000,
                "start_time": 1590000000,
                "end_time": 1700000000
            }]
        },
        "othermine": {
            "pools": [{
                "pair_id": 99,
                "weight": 5.0,
                "balance": "9.000000 HBG",
                "issued": "0.000000 HBG",
                "last_issue_time": 0,
                "start_time": 0,
                "end_time": 0
            }]
        }
    }"#;

    #[test]
    fn default_accounts_select_tables() {
        let state = ChainSnapshot::from_json(SNAPSHOT)
            .unwrap()
            .to_state(&LibraryConfig::default())
            .unwrap();

        let pair = state.get_pair(12).unwrap();
        assert_eq!(pair.reserve0.amount, 45_851_931_234);
        assert_eq!(state.get_config().unwrap().trade_fee, 25);
        assert_eq!(state.get_pool(12).unwrap().balance.amount, 1_000_000);
        assert!(state.get_pool(99).is_none());
        assert!(state.deposit(&Name::new("alice").unwrap()).is_some());
    }

    #[test]
    fn configured_accounts_select_tables() {
        let config = LibraryConfig {
            mine_contract: Name::new("othermine").unwrap(),
            ..LibraryConfig::default()
        };
        let state = ChainSnapshot::from_json(SNAPSHOT).unwrap().to_state(&config).unwrap();
        assert!(state.get_pool(12).is_none());
        assert_eq!(state.get_pool(99).unwrap().weight, 5.0);
        assert!(state.get_pair(12).is_some());
    }

    #[test]
    fn missing_accounts_are_empty() {
        let state = ChainSnapshot::new().to_state(&LibraryConfig::default()).unwrap();
        assert!(state.get_pair(12).is_none());
        assert!(state.get_config().is_none());
        assert_eq!(state.pool_count(), 0);
    }

    #[test]
    fn duplicate_pool_rejected() {
        let mut snapshot = ChainSnapshot::from_json(SNAPSHOT).unwrap();
        let tables = snapshot.tables_mut(Name::mine_contract());
        let copy = tables.pools[0].clone();
        tables.pools.push(copy);

        let err = snapshot.to_state(&LibraryConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::DuplicateKey { table: "pools", ref key, .. } if key == "12"
        ));
    }

    #[test]
    fn same_account_for_both_roles() {
        let mut snapshot = ChainSnapshot::from_json(SNAPSHOT).unwrap();
        let pools = snapshot.tables(&Name::mine_contract()).unwrap().pools.clone();
        snapshot.tables_mut(Name::swap_contract()).pools = pools;

        let config = LibraryConfig {
            mine_contract: Name::swap_contract(),
            ..LibraryConfig::default()
        };
        let state = snapshot.to_state(&config).unwrap();
        assert!(state.get_pair(12).is_some());
        assert!(state.get_pool(12).is_some());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let snapshot = ChainSnapshot::load(file.path()).unwrap();
        assert!(snapshot.tables(&Name::swap_contract()).is_some());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ChainSnapshot::load(&dir.path().join("none.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::Io(_)));
    }

    #[test]
    fn malformed_rows_rejected() {
        let bad = SNAPSHOT.replace("4585193.1234 EOS", "lots of EOS");
        assert!(matches!(ChainSnapshot::from_json(&bad), Err(SnapshotError::Json(_))));
        assert!(ChainSnapshot::from_json("{ \"Bad Account\": {} }").is_err());
    }

    #[test]
    fn pretty_json_reloads() {
        let snapshot = ChainSnapshot::from_json(SNAPSHOT).unwrap();
        let json = snapshot.to_json_pretty().unwrap();
        assert_eq!(ChainSnapshot::from_json(&json).unwrap(), snapshot);
    }
}
