use derive_more::Display;
use serde::Serialize;
use validator::ValidationErrors;

use crate::entities::{
    account::AccountId,
    ids::{CompanyId, EmployeeId, ExperienceId, SkillId},
};

/// Record an operation pointed at that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum Reference {
    #[display("employee #{_0}")]
    Employee(EmployeeId),
    #[display("company #{_0}")]
    Company(CompanyId),
    #[display("experience #{_0}")]
    Experience(ExperienceId),
    #[display("skill #{_0}")]
    Skill(SkillId),
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RegistryError {
    #[display("Email already registered: {_0}")]
    DuplicateEmail(String),

    #[display("Authentication failed")]
    AuthenticationFailed,

    #[display("Unknown company #{_0}")]
    UnknownCompany(CompanyId),

    #[display("Caller must control a company account")]
    MustBeCompany,

    #[display("Employee #{_0} is not in the caller's company")]
    EmployeeNotInCompany(EmployeeId),

    #[display("Caller may not approve experience #{_0}")]
    UnauthorizedApprover(ExperienceId),

    #[display("Unknown {_0}")]
    UnknownReference(Reference),

    #[display("Caller does not control {_0}")]
    NotAccountController(AccountId),

    #[display("Experience #{experience} is not owned by employee #{employee}")]
    ExperienceNotOwned {
        employee: EmployeeId,
        experience: ExperienceId,
    },

    #[display("Experience #{_0} is already approved")]
    ExperienceAlreadyApproved(ExperienceId),

    #[display("Skill #{_0} cannot be endorsed by its owner")]
    SelfEndorsement(SkillId),

    #[display("Employee #{endorser} already endorsed skill #{skill}")]
    DuplicateEndorsement { skill: SkillId, endorser: EmployeeId },

    #[display("validation error: {}", join_field_errors(_0))]
    Validation(Vec<FieldError>),
}

impl std::error::Error for RegistryError {}

/// Coarse class of a failure, for callers that only need to tell
/// "not found" from "not authorized" from "conflict".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    NotFound,
    Unauthorized,
    Conflict,
    Invalid,
}

impl RegistryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RegistryError::UnknownCompany(_) | RegistryError::UnknownReference(_) => {
                ErrorCategory::NotFound
            }
            RegistryError::AuthenticationFailed
            | RegistryError::MustBeCompany
            | RegistryError::EmployeeNotInCompany(_)
            | RegistryError::UnauthorizedApprover(_)
            | RegistryError::NotAccountController(_) => ErrorCategory::Unauthorized,
            RegistryError::DuplicateEmail(_)
            | RegistryError::ExperienceAlreadyApproved(_)
            | RegistryError::DuplicateEndorsement { .. } => ErrorCategory::Conflict,
            RegistryError::ExperienceNotOwned { .. }
            | RegistryError::SelfEndorsement(_)
            | RegistryError::Validation(_) => ErrorCategory::Invalid,
        }
    }

    /// Stable machine-readable name of the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::DuplicateEmail(_) => "duplicate_email",
            RegistryError::AuthenticationFailed => "authentication_failed",
            RegistryError::UnknownCompany(_) => "unknown_company",
            RegistryError::MustBeCompany => "must_be_company",
            RegistryError::EmployeeNotInCompany(_) => "employee_not_in_company",
            RegistryError::UnauthorizedApprover(_) => "unauthorized_approver",
            RegistryError::UnknownReference(_) => "unknown_reference",
            RegistryError::NotAccountController(_) => "not_account_controller",
            RegistryError::ExperienceNotOwned { .. } => "experience_not_owned",
            RegistryError::ExperienceAlreadyApproved(_) => "experience_already_approved",
            RegistryError::SelfEndorsement(_) => "self_endorsement",
            RegistryError::DuplicateEndorsement { .. } => "duplicate_endorsement",
            RegistryError::Validation(_) => "validation",
        }
    }
}

impl From<ValidationErrors> for RegistryError {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors: Vec<FieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();
        field_errors.sort_by(|a, b| a.field.cmp(&b.field));

        RegistryError::Validation(field_errors)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}:{}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_map_to_distinct_categories() {
        let company = CompanyId::new(1).unwrap();
        assert_eq!(
            RegistryError::UnknownCompany(company).category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            RegistryError::MustBeCompany.category(),
            ErrorCategory::Unauthorized
        );
        assert_eq!(
            RegistryError::DuplicateEmail("a@b.com".into()).category(),
            ErrorCategory::Conflict
        );
    }

    #[test]
    fn display_names_the_offending_record() {
        let err = RegistryError::UnknownReference(Reference::Skill(SkillId::new(9).unwrap()));
        assert_eq!(err.to_string(), "Unknown skill #9");

        let err = RegistryError::Validation(vec![FieldError {
            field: "email".into(),
            message: "Invalid email format".into(),
        }]);
        assert_eq!(err.to_string(), "validation error: email:Invalid email format");
    }
}
