use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::loco::LocoRecord;

/// Point-in-time, read-only dashboard dataset keyed by assetId.
///
/// A snapshot is treated as a value: the resolver holds one reference for
/// the duration of a single resolution call and never observes mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FleetSnapshot {
    pub records: HashMap<String, LocoRecord>,
}

impl FleetSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from records, keyed by each record's assetId.
    pub fn from_records(records: impl IntoIterator<Item = LocoRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|r| (r.asset_id.clone(), r))
                .collect(),
        }
    }

    /// Direct key lookup by assetId.
    pub fn get(&self, asset_id: &str) -> Option<&LocoRecord> {
        self.records.get(asset_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocoRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(asset_id: &str, loco_no: &str, name: &str) -> LocoRecord {
        serde_json::from_value(serde_json::json!({
            "id": asset_id,
            "name": name,
            "locoNo": loco_no,
        }))
        .unwrap()
    }

    #[test]
    fn from_records_keys_by_asset_id() {
        let snapshot = FleetSnapshot::from_records([
            record("5f8a1c2b3d4e5f6a7b8c9d0e", "4430", "4430 SD70M"),
            record("6a9b2c3d4e5f6a7b8c9d0e1f", "903", "903 GP38-2"),
        ]);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(
            snapshot.get("5f8a1c2b3d4e5f6a7b8c9d0e").unwrap().loco_no,
            "4430"
        );
        assert!(snapshot.get("000000000000000000000000").is_none());
    }
}
