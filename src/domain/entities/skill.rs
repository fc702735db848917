use std::num::NonZeroU32;

use serde::Serialize;

use crate::entities::ids::{CertificationId, EmployeeId, EndorsementId, SkillId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub id: SkillId,
    pub employee_id: EmployeeId,
    pub name: String,
    pub is_verified: bool,
    pub certification_ids: Vec<CertificationId>,
    pub endorsement_ids: Vec<EndorsementId>,
}

impl Skill {
    pub fn new(id: SkillId, employee_id: EmployeeId, name: String) -> Self {
        Skill {
            id,
            employee_id,
            name,
            is_verified: false,
            certification_ids: Vec::new(),
            endorsement_ids: Vec::new(),
        }
    }
}

/// Rule deciding when endorsements mark a skill as verified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerificationPolicy {
    /// Endorsements are recorded but never flip `is_verified`.
    #[default]
    Manual,
    /// Verified once the skill holds this many distinct endorsements.
    Endorsements(NonZeroU32),
}

impl VerificationPolicy {
    pub fn is_satisfied(&self, endorsements: usize) -> bool {
        match self {
            VerificationPolicy::Manual => false,
            VerificationPolicy::Endorsements(threshold) => {
                endorsements >= threshold.get() as usize
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_policy_never_verifies() {
        assert!(!VerificationPolicy::Manual.is_satisfied(0));
        assert!(!VerificationPolicy::Manual.is_satisfied(1_000));
    }

    #[test]
    fn endorsement_policy_verifies_at_threshold() {
        let policy = VerificationPolicy::Endorsements(NonZeroU32::new(2).unwrap());
        assert!(!policy.is_satisfied(1));
        assert!(policy.is_satisfied(2));
        assert!(policy.is_satisfied(3));
    }
}
