//! In-memory dashboard provider for tests and development.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rh_protocol::{AssetStates, FleetSnapshot, Inspection, LocoRecord, OutOfUseCredit};

use crate::provider::{DashboardProvider, ProviderError};

/// A mock provider serving a pre-loaded snapshot.
pub struct MockDashboardProvider {
    snapshot: FleetSnapshot,
    fail: bool,
}

impl MockDashboardProvider {
    pub fn new(snapshot: FleetSnapshot) -> Self {
        Self {
            snapshot,
            fail: false,
        }
    }

    /// Create a mock serving the sample fleet.
    pub fn with_sample_fleet() -> Self {
        Self::new(sample_fleet())
    }

    /// Create a mock whose fetches always fail.
    pub fn failing() -> Self {
        Self {
            snapshot: FleetSnapshot::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl DashboardProvider for MockDashboardProvider {
    async fn get_dashboard_data(&self) -> Result<FleetSnapshot, ProviderError> {
        if self.fail {
            return Err(ProviderError::Decode("mock provider set to fail".into()));
        }
        Ok(self.snapshot.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Sample fleet used across tests and the dev server: an in-service road
/// unit, an out-of-use switcher with a trailing space in its loco number,
/// and a stored unit with no inspections on file.
pub fn sample_fleet() -> FleetSnapshot {
    let now = Utc::now();
    FleetSnapshot::from_records([
        LocoRecord {
            asset_id: "5f8a1c2b3d4e5f6a7b8c9d0e".into(),
            name: "4430 SD70M".into(),
            mu_id: Some("mu-12".into()),
            loco_no: "4430".into(),
            asset_states: AssetStates {
                in_service: true,
                out_of_use: false,
                stored: false,
            },
            out_of_use_credit: None,
            last_inspection: Some(Inspection {
                inspection_type: Some("annual".into()),
                date: Some(now - Duration::days(335)),
                due_date: None,
                notes: None,
            }),
            due_inspection: Some(Inspection {
                inspection_type: Some("annual".into()),
                date: None,
                due_date: Some(now + Duration::days(30)),
                notes: None,
            }),
        },
        LocoRecord {
            asset_id: "6a9b2c3d4e5f6a7b8c9d0e1f".into(),
            name: "903 GP38-2".into(),
            mu_id: None,
            loco_no: "903 ".into(),
            asset_states: AssetStates {
                in_service: false,
                out_of_use: true,
                stored: false,
            },
            out_of_use_credit: Some(OutOfUseCredit {
                days_accrued: 47,
                since: Some(now - Duration::days(47)),
            }),
            last_inspection: Some(Inspection {
                inspection_type: Some("quarterly".into()),
                date: Some(now - Duration::days(120)),
                due_date: None,
                notes: Some("wheelset flagged for follow-up".into()),
            }),
            due_inspection: None,
        },
        LocoRecord {
            asset_id: "7b0c3d4e5f6a7b8c9d0e1f2a".into(),
            name: "7012 ES44AC".into(),
            mu_id: None,
            loco_no: "7012".into(),
            asset_states: AssetStates {
                in_service: false,
                out_of_use: false,
                stored: true,
            },
            out_of_use_credit: None,
            last_inspection: None,
            due_inspection: None,
        },
    ])
}
