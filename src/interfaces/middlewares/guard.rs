use crate::{
    entities::{
        account::AccountId,
        ids::{CompanyId, EmployeeId, ExperienceId},
        principal::Principal,
    },
    errors::{Reference, RegistryError},
    repositories::account::AccountDirectory,
};

/// Caller predicates evaluated before any registry state is touched.
///
/// The guard holds no state of its own; every answer comes from the
/// account directory it wraps.
pub struct AuthorizationGuard<'a, D: AccountDirectory + ?Sized> {
    directory: &'a D,
}

impl<'a, D: AccountDirectory + ?Sized> AuthorizationGuard<'a, D> {
    pub fn new(directory: &'a D) -> Self {
        AuthorizationGuard { directory }
    }

    /// Succeeds when `caller` is the controlling principal of `account`.
    pub fn caller_controls(
        &self,
        caller: &Principal,
        account: AccountId,
    ) -> Result<(), RegistryError> {
        let controller = match account {
            AccountId::Employee(id) => self
                .directory
                .employee_principal(id)
                .ok_or(RegistryError::UnknownReference(Reference::Employee(id)))?,
            AccountId::Company(id) => self
                .directory
                .company_principal(id)
                .ok_or(RegistryError::UnknownReference(Reference::Company(id)))?,
        };

        if &controller != caller {
            tracing::warn!(%caller, %account, "Caller does not control account");
            return Err(RegistryError::NotAccountController(account));
        }
        Ok(())
    }

    pub fn caller_controls_employee(
        &self,
        caller: &Principal,
        employee_id: EmployeeId,
    ) -> Result<(), RegistryError> {
        self.caller_controls(caller, AccountId::Employee(employee_id))
    }

    /// Companies controlled by `caller`; fails if there are none.
    pub fn caller_is_company(&self, caller: &Principal) -> Result<Vec<CompanyId>, RegistryError> {
        let companies = self.directory.companies_controlled_by(caller);
        if companies.is_empty() {
            tracing::warn!(%caller, "Caller controls no company account");
            return Err(RegistryError::MustBeCompany);
        }
        Ok(companies)
    }

    /// Resolves the company of `employee_id` and checks that `caller` controls it.
    pub fn caller_is_company_of(
        &self,
        caller: &Principal,
        employee_id: EmployeeId,
    ) -> Result<CompanyId, RegistryError> {
        let controlled = self.caller_is_company(caller)?;

        let company_id = self
            .directory
            .employee_company(employee_id)
            .ok_or(RegistryError::UnknownReference(Reference::Employee(employee_id)))?
            .ok_or(RegistryError::EmployeeNotInCompany(employee_id))?;

        if !controlled.contains(&company_id) {
            tracing::warn!(
                %caller,
                %employee_id,
                %company_id,
                "Employee belongs to another company"
            );
            return Err(RegistryError::EmployeeNotInCompany(employee_id));
        }
        Ok(company_id)
    }

    /// Only the controller of the experience's company may approve it.
    pub fn caller_may_approve(
        &self,
        caller: &Principal,
        company_id: CompanyId,
        experience_id: ExperienceId,
    ) -> Result<(), RegistryError> {
        match self.directory.company_principal(company_id) {
            Some(controller) if &controller == caller => Ok(()),
            _ => {
                tracing::warn!(%caller, %experience_id, "Unauthorized experience approval");
                Err(RegistryError::UnauthorizedApprover(experience_id))
            }
        }
    }
}
