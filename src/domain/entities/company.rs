use serde::Serialize;

use crate::entities::{ids::CompanyId, principal::Principal};

/// Company account. Its unverified/current/previous employee sets live in the
/// membership index rather than on the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub email: String,
    pub principal: Principal,
}

impl Company {
    pub fn new(id: CompanyId, name: String, email: String, principal: Principal) -> Self {
        Company {
            id,
            name,
            email,
            principal,
        }
    }
}
