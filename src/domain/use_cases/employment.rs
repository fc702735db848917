use crate::{
    entities::{
        experience::{ExperienceApproval, NewExperience},
        ids::{CompanyId, EmployeeId, ExperienceId},
        membership::MembershipStatus,
        principal::Principal,
    },
    errors::{Reference, RegistryError},
    middlewares::guard::AuthorizationGuard,
    repositories::{account::AccountRepository, experience::ExperienceRepository},
};

/// Employment history: proposals, company approval and the
/// unverified/current/previous classification that follows from them.
///
/// Every method checks all of its preconditions before the first write, so a
/// failed call leaves the tables exactly as it found them.
pub struct EmploymentLedger<'a, R>
where
    R: AccountRepository + ExperienceRepository,
{
    pub repo: &'a mut R,
}

impl<'a, R> EmploymentLedger<'a, R>
where
    R: AccountRepository + ExperienceRepository,
{
    pub fn new(repo: &'a mut R) -> Self {
        EmploymentLedger { repo }
    }

    /// Affiliates an employee with a company without touching membership.
    pub fn set_company(
        &mut self,
        caller: &Principal,
        employee_id: EmployeeId,
        company_id: CompanyId,
    ) -> Result<(), RegistryError> {
        AuthorizationGuard::new(&*self.repo).caller_controls_employee(caller, employee_id)?;

        if self.repo.company(company_id).is_none() {
            return Err(RegistryError::UnknownCompany(company_id));
        }

        let employee = self
            .repo
            .employee_mut(employee_id)
            .ok_or(RegistryError::UnknownReference(Reference::Employee(employee_id)))?;
        employee.company_id = Some(company_id);

        tracing::info!(%employee_id, %company_id, "Employee company set");
        Ok(())
    }

    pub fn approve_manager(
        &mut self,
        caller: &Principal,
        employee_id: EmployeeId,
    ) -> Result<(), RegistryError> {
        let company_id =
            AuthorizationGuard::new(&*self.repo).caller_is_company_of(caller, employee_id)?;

        let employee = self
            .repo
            .employee_mut(employee_id)
            .ok_or(RegistryError::UnknownReference(Reference::Employee(employee_id)))?;
        employee.is_manager = true;

        tracing::info!(%employee_id, %company_id, "Manager approved");
        Ok(())
    }

    /// Records a pending experience and marks the employee as unverified for
    /// the company.
    pub fn add_experience(
        &mut self,
        caller: &Principal,
        employee_id: EmployeeId,
        request: NewExperience,
    ) -> Result<ExperienceId, RegistryError> {
        AuthorizationGuard::new(&*self.repo).caller_controls_employee(caller, employee_id)?;

        let company_id = request.company_id;
        if self.repo.company(company_id).is_none() {
            tracing::warn!(%employee_id, %company_id, "Experience references unknown company");
            return Err(RegistryError::UnknownCompany(company_id));
        }

        let experience_id = self.repo.insert_experience(employee_id, request);
        if let Some(employee) = self.repo.employee_mut(employee_id) {
            employee.experience_ids.push(experience_id);
        }
        self.repo
            .set_membership(company_id, employee_id, MembershipStatus::Unverified);

        tracing::info!(%employee_id, %company_id, %experience_id, "Experience proposed");
        Ok(experience_id)
    }

    /// Company-side approval. Moves the employee from unverified into current
    /// or previous depending on `is_active`.
    pub fn approve_experience(
        &mut self,
        caller: &Principal,
        employee_id: EmployeeId,
        experience_id: ExperienceId,
        is_active: bool,
    ) -> Result<(), RegistryError> {
        let experience = self
            .repo
            .experience(experience_id)
            .ok_or(RegistryError::UnknownReference(Reference::Experience(experience_id)))?;
        let company_id = experience.company_id;
        let owner = experience.employee_id;
        let already_approved = experience.is_approved();

        AuthorizationGuard::new(&*self.repo).caller_may_approve(caller, company_id, experience_id)?;

        if owner != employee_id {
            return Err(RegistryError::ExperienceNotOwned {
                employee: employee_id,
                experience: experience_id,
            });
        }
        if already_approved {
            return Err(RegistryError::ExperienceAlreadyApproved(experience_id));
        }

        if let Some(experience) = self.repo.experience_mut(experience_id) {
            experience.approval = ExperienceApproval::Approved { active: is_active };
        }
        let status = MembershipStatus::after_approval(is_active);
        self.repo.set_membership(company_id, employee_id, status);

        tracing::info!(%employee_id, %company_id, %experience_id, ?status, "Experience approved");
        Ok(())
    }

    pub fn set_current_active_experience(
        &mut self,
        caller: &Principal,
        employee_id: EmployeeId,
        experience_id: ExperienceId,
    ) -> Result<(), RegistryError> {
        AuthorizationGuard::new(&*self.repo).caller_controls_employee(caller, employee_id)?;

        let owner = self
            .repo
            .experience(experience_id)
            .map(|e| e.employee_id)
            .ok_or(RegistryError::UnknownReference(Reference::Experience(experience_id)))?;
        if owner != employee_id {
            return Err(RegistryError::ExperienceNotOwned {
                employee: employee_id,
                experience: experience_id,
            });
        }

        let employee = self
            .repo
            .employee_mut(employee_id)
            .ok_or(RegistryError::UnknownReference(Reference::Employee(employee_id)))?;
        employee.current_experience_id = Some(experience_id);

        tracing::info!(%employee_id, %experience_id, "Current experience set");
        Ok(())
    }
}
