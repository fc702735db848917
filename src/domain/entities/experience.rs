use serde::{Deserialize, Serialize};

use crate::entities::ids::{CompanyId, EmployeeId, ExperienceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ExperienceApproval {
    Pending,
    Approved { active: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub id: ExperienceId,
    pub employee_id: EmployeeId,
    pub company_id: CompanyId,
    pub start: String,
    pub end: String,
    pub role: String,
    pub approval: ExperienceApproval,
}

impl Experience {
    pub fn new(id: ExperienceId, employee_id: EmployeeId, request: NewExperience) -> Self {
        Experience {
            id,
            employee_id,
            company_id: request.company_id,
            start: request.start,
            end: request.end,
            role: request.role,
            approval: ExperienceApproval::Pending,
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self.approval, ExperienceApproval::Approved { .. })
    }

    /// Always false while the experience awaits approval.
    pub fn is_active(&self) -> bool {
        matches!(self.approval, ExperienceApproval::Approved { active: true })
    }
}

/// Employment claim proposed by an employee. Labels are free-form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewExperience {
    pub start: String,
    pub end: String,
    pub role: String,
    pub company_id: CompanyId,
}

impl NewExperience {
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        role: impl Into<String>,
        company_id: CompanyId,
    ) -> Self {
        NewExperience {
            start: start.into(),
            end: end.into(),
            role: role.into(),
            company_id,
        }
    }
}
