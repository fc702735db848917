use crate::{
    entities::{
        experience::{Experience, NewExperience},
        ids::{CompanyId, EmployeeId, ExperienceId},
        membership::MembershipStatus,
    },
    repositories::memory_repo::InMemoryRepo,
};

pub trait ExperienceRepository {
    fn experience(&self, id: ExperienceId) -> Option<&Experience>;
    fn experience_mut(&mut self, id: ExperienceId) -> Option<&mut Experience>;
    fn insert_experience(
        &mut self,
        employee_id: EmployeeId,
        request: NewExperience,
    ) -> ExperienceId;

    /// Returns `MembershipStatus::None` when the pair was never linked.
    fn membership(&self, company_id: CompanyId, employee_id: EmployeeId) -> MembershipStatus;
    fn set_membership(
        &mut self,
        company_id: CompanyId,
        employee_id: EmployeeId,
        status: MembershipStatus,
    );

    /// Employees of `company_id` holding `status`, in ascending id order.
    fn members_with_status(
        &self,
        company_id: CompanyId,
        status: MembershipStatus,
    ) -> Vec<EmployeeId>;
}

impl ExperienceRepository for InMemoryRepo {
    fn experience(&self, id: ExperienceId) -> Option<&Experience> {
        self.experiences.get(id.index())
    }

    fn experience_mut(&mut self, id: ExperienceId) -> Option<&mut Experience> {
        self.experiences.get_mut(id.index())
    }

    fn insert_experience(
        &mut self,
        employee_id: EmployeeId,
        request: NewExperience,
    ) -> ExperienceId {
        let id = ExperienceId::from_index(self.experiences.len());
        self.experiences.push(Experience::new(id, employee_id, request));
        id
    }

    fn membership(&self, company_id: CompanyId, employee_id: EmployeeId) -> MembershipStatus {
        self.memberships
            .get(&(company_id, employee_id))
            .copied()
            .unwrap_or_default()
    }

    fn set_membership(
        &mut self,
        company_id: CompanyId,
        employee_id: EmployeeId,
        status: MembershipStatus,
    ) {
        match status {
            MembershipStatus::None => {
                self.memberships.remove(&(company_id, employee_id));
            }
            _ => {
                self.memberships.insert((company_id, employee_id), status);
            }
        }
    }

    fn members_with_status(
        &self,
        company_id: CompanyId,
        status: MembershipStatus,
    ) -> Vec<EmployeeId> {
        // Keys sort by company first, so one company's members are contiguous.
        self.memberships
            .range((company_id, EmployeeId::from_index(0))..)
            .take_while(|((company, _), _)| *company == company_id)
            .filter(|(_, current)| **current == status)
            .map(|((_, employee), _)| *employee)
            .collect()
    }
}
