use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    entities::{
        account::{AccountKind, SignUpRequest},
        certification::NewCertification,
        experience::NewExperience,
        ids::{CertificationId, CompanyId, EmployeeId, EndorsementId, ExperienceId, SkillId},
        principal::Principal,
    },
    errors::{ErrorCategory, RegistryError},
    registry::Registry,
};

/// One call into the registry, as submitted by the hosting environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub caller: Principal,
    #[serde(flatten)]
    pub operation: Operation,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    SignUp {
        email: String,
        name: String,
        kind: AccountKind,
    },
    Authenticate {
        email: String,
    },
    UpdateControllingPrincipal {
        kind: AccountKind,
        email: String,
        new_principal: Principal,
    },
    SetCompany {
        employee_id: EmployeeId,
        company_id: CompanyId,
    },
    ApproveManager {
        employee_id: EmployeeId,
    },
    AddExperience {
        employee_id: EmployeeId,
        start: String,
        end: String,
        role: String,
        company_id: CompanyId,
    },
    ApproveExperience {
        employee_id: EmployeeId,
        experience_id: ExperienceId,
        is_active: bool,
    },
    SetCurrentActiveExperience {
        employee_id: EmployeeId,
        experience_id: ExperienceId,
    },
    AddSkill {
        employee_id: EmployeeId,
        name: String,
    },
    AddCertification {
        skill_id: SkillId,
        url: String,
        issued_on: String,
        valid_till: String,
        name: String,
        issuer: String,
    },
    AddEndorsement {
        skill_id: SkillId,
        endorser_id: EmployeeId,
    },
    GetCompanyUnverifiedEmployees {
        company_id: CompanyId,
    },
    GetCompanyCurrentEmployees {
        company_id: CompanyId,
    },
    GetCompanyPreviousEmployees {
        company_id: CompanyId,
    },
    GetEmployeeExperiences {
        employee_id: EmployeeId,
    },
    GetEmployeeSkills {
        employee_id: EmployeeId,
    },
    GetSkillCertifications {
        skill_id: SkillId,
    },
    GetSkillEndorsements {
        skill_id: SkillId,
    },
    GetEmployee {
        employee_id: EmployeeId,
    },
    GetCompany {
        company_id: CompanyId,
    },
    GetExperience {
        experience_id: ExperienceId,
    },
    GetSkill {
        skill_id: SkillId,
    },
    GetCertification {
        certification_id: CertificationId,
    },
    GetEndorsement {
        endorsement_id: EndorsementId,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Ok(Value),
    Error(ErrorBody),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub category: ErrorCategory,
    pub message: String,
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }
}

impl From<RegistryError> for Outcome {
    fn from(err: RegistryError) -> Self {
        Outcome::Error(ErrorBody {
            code: err.code().to_string(),
            category: err.category(),
            message: err.to_string(),
        })
    }
}

/// Parses a replay script: a JSON array of requests.
pub fn parse_script(script: &str) -> Result<Vec<Request>, serde_json::Error> {
    serde_json::from_str(script)
}

/// Applies `request` to `registry` and reports the result.
pub fn dispatch(registry: &Registry, request: Request) -> Outcome {
    let caller = &request.caller;
    tracing::debug!(%caller, operation = ?request.operation, "Dispatching operation");

    match request.operation {
        Operation::SignUp { email, name, kind } => {
            respond(registry.sign_up(caller, SignUpRequest { email, name, kind }))
        }
        Operation::Authenticate { email } => respond(registry.authenticate(caller, &email)),
        Operation::UpdateControllingPrincipal {
            kind,
            email,
            new_principal,
        } => respond(registry.update_controlling_principal(caller, kind, &email, new_principal)),
        Operation::SetCompany {
            employee_id,
            company_id,
        } => respond(registry.set_company(caller, employee_id, company_id)),
        Operation::ApproveManager { employee_id } => {
            respond(registry.approve_manager(caller, employee_id))
        }
        Operation::AddExperience {
            employee_id,
            start,
            end,
            role,
            company_id,
        } => {
            let experience = NewExperience {
                start,
                end,
                role,
                company_id,
            };
            respond(registry.add_experience(caller, employee_id, experience))
        }
        Operation::ApproveExperience {
            employee_id,
            experience_id,
            is_active,
        } => respond(registry.approve_experience(caller, employee_id, experience_id, is_active)),
        Operation::SetCurrentActiveExperience {
            employee_id,
            experience_id,
        } => respond(registry.set_current_active_experience(caller, employee_id, experience_id)),
        Operation::AddSkill { employee_id, name } => {
            respond(registry.add_skill(caller, employee_id, name))
        }
        Operation::AddCertification {
            skill_id,
            url,
            issued_on,
            valid_till,
            name,
            issuer,
        } => {
            let certification = NewCertification {
                url,
                issued_on,
                valid_till,
                name,
                issuer,
            };
            respond(registry.add_certification(caller, skill_id, certification))
        }
        Operation::AddEndorsement {
            skill_id,
            endorser_id,
        } => respond(registry.add_endorsement(caller, skill_id, endorser_id)),
        Operation::GetCompanyUnverifiedEmployees { company_id } => {
            ok(registry.get_company_unverified_employees(company_id))
        }
        Operation::GetCompanyCurrentEmployees { company_id } => {
            ok(registry.get_company_current_employees(company_id))
        }
        Operation::GetCompanyPreviousEmployees { company_id } => {
            ok(registry.get_company_previous_employees(company_id))
        }
        Operation::GetEmployeeExperiences { employee_id } => {
            ok(registry.get_employee_experiences(employee_id))
        }
        Operation::GetEmployeeSkills { employee_id } => {
            ok(registry.get_employee_skills(employee_id))
        }
        Operation::GetSkillCertifications { skill_id } => {
            ok(registry.get_skill_certifications(skill_id))
        }
        Operation::GetSkillEndorsements { skill_id } => {
            ok(registry.get_skill_endorsements(skill_id))
        }
        Operation::GetEmployee { employee_id } => ok(registry.get_employee(employee_id)),
        Operation::GetCompany { company_id } => ok(registry.get_company(company_id)),
        Operation::GetExperience { experience_id } => ok(registry.get_experience(experience_id)),
        Operation::GetSkill { skill_id } => ok(registry.get_skill(skill_id)),
        Operation::GetCertification { certification_id } => {
            ok(registry.get_certification(certification_id))
        }
        Operation::GetEndorsement { endorsement_id } => {
            ok(registry.get_endorsement(endorsement_id))
        }
    }
}

fn respond<T: Serialize>(result: Result<T, RegistryError>) -> Outcome {
    match result {
        Ok(value) => ok(value),
        Err(err) => err.into(),
    }
}

fn ok<T: Serialize>(value: T) -> Outcome {
    match serde_json::to_value(value) {
        Ok(value) => Outcome::Ok(value),
        Err(e) => Outcome::Error(ErrorBody {
            code: "serialization".to_string(),
            category: ErrorCategory::Invalid,
            message: e.to_string(),
        }),
    }
}
