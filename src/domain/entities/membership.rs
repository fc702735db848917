use serde::{Deserialize, Serialize};

/// Where an employee stands with a company.
///
/// One status per (company, employee) pair, so the three membership sets are
/// disjoint by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    #[default]
    None,
    Unverified,
    Current,
    Previous,
}

impl MembershipStatus {
    /// Destination set once the company has approved an experience.
    pub fn after_approval(is_active: bool) -> Self {
        if is_active {
            MembershipStatus::Current
        } else {
            MembershipStatus::Previous
        }
    }
}
