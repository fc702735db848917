use serde::Serialize;

use crate::entities::ids::{EmployeeId, EndorsementId, SkillId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Endorsement {
    pub id: EndorsementId,
    pub skill_id: SkillId,
    pub endorser_id: EmployeeId,
}
