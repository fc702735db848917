use serde::Serialize;

use crate::entities::{
    ids::{CompanyId, EmployeeId, ExperienceId, SkillId},
    principal::Principal,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub principal: Principal,
    pub company_id: Option<CompanyId>,
    pub is_manager: bool,
    pub current_experience_id: Option<ExperienceId>,
    pub experience_ids: Vec<ExperienceId>,
    pub skill_ids: Vec<SkillId>,
}

impl Employee {
    pub fn new(id: EmployeeId, name: String, email: String, principal: Principal) -> Self {
        Employee {
            id,
            name,
            email,
            principal,
            company_id: None,
            is_manager: false,
            current_experience_id: None,
            experience_ids: Vec::new(),
            skill_ids: Vec::new(),
        }
    }
}
