use derive_more::Display;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::ids::{CompanyId, EmployeeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    #[display("employee")]
    Employee,
    #[display("company")]
    Company,
}

/// Kind-tagged account id, as returned by sign up and authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum AccountId {
    #[display("employee #{_0}")]
    Employee(EmployeeId),
    #[display("company #{_0}")]
    Company(CompanyId),
}

impl AccountId {
    pub fn kind(&self) -> AccountKind {
        match self {
            AccountId::Employee(_) => AccountKind::Employee,
            AccountId::Company(_) => AccountKind::Company,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(length(min = 1, message = "Email cannot be empty"))]
    pub email: String,

    pub name: String,

    pub kind: AccountKind,
}

impl SignUpRequest {
    pub fn new(email: impl Into<String>, name: impl Into<String>, kind: AccountKind) -> Self {
        SignUpRequest {
            email: email.into(),
            name: name.into(),
            kind,
        }
    }
}
