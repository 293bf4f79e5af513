use serde::{Deserialize, Serialize};

/// Dashboard backend functions known to the advisor.
///
/// A static mirror of the backend's function catalog. Mutating siblings
/// are listed so the advisor can recognise them, but only `Read`
/// functions may ever be suggested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DashboardFunction {
    GetDashBoardData,
    GetLocoInspectionHistory,
    GetOutOfUseCredit,
    UpdateLocoStatus,
    ScheduleInspection,
}

/// Whether a catalog function reads or mutates dashboard state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionKind {
    Read,
    Mutating,
}

impl DashboardFunction {
    /// Wire name of the backend function.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetDashBoardData => "getDashBoardData",
            Self::GetLocoInspectionHistory => "getLocoInspectionHistory",
            Self::GetOutOfUseCredit => "getOutOfUseCredit",
            Self::UpdateLocoStatus => "updateLocoStatus",
            Self::ScheduleInspection => "scheduleInspection",
        }
    }

    pub fn kind(&self) -> FunctionKind {
        match self {
            Self::GetDashBoardData => FunctionKind::Read,
            Self::GetLocoInspectionHistory => FunctionKind::Read,
            Self::GetOutOfUseCredit => FunctionKind::Read,
            Self::UpdateLocoStatus => FunctionKind::Mutating,
            Self::ScheduleInspection => FunctionKind::Mutating,
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.kind() == FunctionKind::Read
    }
}

/// What the admin is asking for, independent of which locomotive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadIntent {
    /// When is the next inspection due.
    DueInspection,
    /// Details of the most recent completed inspection.
    LastInspection,
    /// Accrued out-of-use credit.
    OutOfUseCredit,
    /// Current operational status of a locomotive.
    AssetStatus,
    /// Fleet-wide list of overdue inspections.
    OverdueOverview,
    /// Fleet-wide summary.
    FleetOverview,
}

impl ReadIntent {
    /// The catalog function answering this intent. All intents map to
    /// read functions; `suggest` re-checks this before recommending.
    pub fn function(&self) -> DashboardFunction {
        match self {
            Self::DueInspection => DashboardFunction::GetDashBoardData,
            Self::LastInspection => DashboardFunction::GetLocoInspectionHistory,
            Self::OutOfUseCredit => DashboardFunction::GetOutOfUseCredit,
            Self::AssetStatus => DashboardFunction::GetDashBoardData,
            Self::OverdueOverview => DashboardFunction::GetDashBoardData,
            Self::FleetOverview => DashboardFunction::GetDashBoardData,
        }
    }

    /// Result fields the dashboard should display for this intent.
    /// The assetId is a join key, never a display field.
    pub fn display_fields(&self) -> &'static [&'static str] {
        match self {
            Self::DueInspection => &["name", "locoNo", "DueInspec"],
            Self::LastInspection => &["name", "locoNo", "LastInspec"],
            Self::OutOfUseCredit => &["name", "locoNo", "outOfUseCredit"],
            Self::AssetStatus => &["name", "locoNo", "assetStates"],
            Self::OverdueOverview => &["name", "locoNo", "DueInspec"],
            Self::FleetOverview => &["name", "locoNo", "assetStates"],
        }
    }

    /// Whether the intent needs a specific locomotive resolved first.
    /// Fleet-scoped intents are answerable with no reference extracted.
    pub fn requires_locomotive(&self) -> bool {
        match self {
            Self::DueInspection | Self::LastInspection | Self::OutOfUseCredit | Self::AssetStatus => {
                true
            }
            Self::OverdueOverview | Self::FleetOverview => false,
        }
    }
}
