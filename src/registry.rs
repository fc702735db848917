use parking_lot::RwLock;

use crate::{
    entities::{
        account::{AccountId, AccountKind, SignUpRequest},
        certification::{Certification, NewCertification},
        company::Company,
        employee::Employee,
        endorsement::Endorsement,
        experience::{Experience, NewExperience},
        ids::{CertificationId, CompanyId, EmployeeId, EndorsementId, ExperienceId, SkillId},
        membership::MembershipStatus,
        principal::Principal,
        skill::{Skill, VerificationPolicy},
    },
    errors::RegistryError,
    repositories::{
        account::AccountRepository, experience::ExperienceRepository, memory_repo::InMemoryRepo,
        skill::SkillRepository,
    },
    settings::AppConfig,
    use_cases::{
        employment::EmploymentLedger,
        identity::{resolve_controlled_account, IdentityRegistry},
        skills::SkillRegistry,
    },
};

/// The registry's public surface.
///
/// Mutations run one at a time under the write lock, each validating before
/// its first write, so operations apply in a strict total order and never
/// leave partial effects. Queries share the read lock and only ever see
/// fully applied operations.
#[derive(Debug, Default)]
pub struct Registry {
    state: RwLock<InMemoryRepo>,
    policy: VerificationPolicy,
}

impl Registry {
    pub fn new(policy: VerificationPolicy) -> Self {
        Registry {
            state: RwLock::new(InMemoryRepo::new()),
            policy,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Registry::new(config.verification_policy())
    }

    pub fn policy(&self) -> VerificationPolicy {
        self.policy
    }

    // Identity

    pub fn sign_up(
        &self,
        caller: &Principal,
        request: SignUpRequest,
    ) -> Result<AccountId, RegistryError> {
        let mut state = self.state.write();
        IdentityRegistry::new(&mut *state).sign_up(caller, request)
    }

    pub fn authenticate(
        &self,
        caller: &Principal,
        email: &str,
    ) -> Result<AccountId, RegistryError> {
        resolve_controlled_account(&*self.state.read(), caller, email)
    }

    pub fn update_controlling_principal(
        &self,
        caller: &Principal,
        kind: AccountKind,
        email: &str,
        new_principal: Principal,
    ) -> Result<(), RegistryError> {
        let mut state = self.state.write();
        IdentityRegistry::new(&mut *state).update_controlling_principal(
            caller,
            kind,
            email,
            new_principal,
        )
    }

    // Employment

    pub fn set_company(
        &self,
        caller: &Principal,
        employee_id: EmployeeId,
        company_id: CompanyId,
    ) -> Result<(), RegistryError> {
        let mut state = self.state.write();
        EmploymentLedger::new(&mut *state).set_company(caller, employee_id, company_id)
    }

    pub fn approve_manager(
        &self,
        caller: &Principal,
        employee_id: EmployeeId,
    ) -> Result<(), RegistryError> {
        let mut state = self.state.write();
        EmploymentLedger::new(&mut *state).approve_manager(caller, employee_id)
    }

    pub fn add_experience(
        &self,
        caller: &Principal,
        employee_id: EmployeeId,
        request: NewExperience,
    ) -> Result<ExperienceId, RegistryError> {
        let mut state = self.state.write();
        EmploymentLedger::new(&mut *state).add_experience(caller, employee_id, request)
    }

    pub fn approve_experience(
        &self,
        caller: &Principal,
        employee_id: EmployeeId,
        experience_id: ExperienceId,
        is_active: bool,
    ) -> Result<(), RegistryError> {
        let mut state = self.state.write();
        EmploymentLedger::new(&mut *state).approve_experience(
            caller,
            employee_id,
            experience_id,
            is_active,
        )
    }

    pub fn set_current_active_experience(
        &self,
        caller: &Principal,
        employee_id: EmployeeId,
        experience_id: ExperienceId,
    ) -> Result<(), RegistryError> {
        let mut state = self.state.write();
        EmploymentLedger::new(&mut *state).set_current_active_experience(
            caller,
            employee_id,
            experience_id,
        )
    }

    // Skills

    pub fn add_skill(
        &self,
        caller: &Principal,
        employee_id: EmployeeId,
        name: impl Into<String>,
    ) -> Result<SkillId, RegistryError> {
        let mut state = self.state.write();
        SkillRegistry::new(&mut *state, self.policy).add_skill(caller, employee_id, name.into())
    }

    pub fn add_certification(
        &self,
        caller: &Principal,
        skill_id: SkillId,
        request: NewCertification,
    ) -> Result<CertificationId, RegistryError> {
        let mut state = self.state.write();
        SkillRegistry::new(&mut *state, self.policy).add_certification(caller, skill_id, request)
    }

    pub fn add_endorsement(
        &self,
        caller: &Principal,
        skill_id: SkillId,
        endorser_id: EmployeeId,
    ) -> Result<EndorsementId, RegistryError> {
        let mut state = self.state.write();
        SkillRegistry::new(&mut *state, self.policy).add_endorsement(caller, skill_id, endorser_id)
    }

    // Queries

    pub fn get_company_unverified_employees(&self, company_id: CompanyId) -> Vec<EmployeeId> {
        self.company_members(company_id, MembershipStatus::Unverified)
    }

    pub fn get_company_current_employees(&self, company_id: CompanyId) -> Vec<EmployeeId> {
        self.company_members(company_id, MembershipStatus::Current)
    }

    pub fn get_company_previous_employees(&self, company_id: CompanyId) -> Vec<EmployeeId> {
        self.company_members(company_id, MembershipStatus::Previous)
    }

    pub fn membership_status(
        &self,
        company_id: CompanyId,
        employee_id: EmployeeId,
    ) -> MembershipStatus {
        self.state.read().membership(company_id, employee_id)
    }

    pub fn get_employee_experiences(&self, employee_id: EmployeeId) -> Vec<ExperienceId> {
        self.state
            .read()
            .employee(employee_id)
            .map(|e| e.experience_ids.clone())
            .unwrap_or_default()
    }

    pub fn get_employee_skills(&self, employee_id: EmployeeId) -> Vec<SkillId> {
        self.state
            .read()
            .employee(employee_id)
            .map(|e| e.skill_ids.clone())
            .unwrap_or_default()
    }

    pub fn get_skill_certifications(&self, skill_id: SkillId) -> Vec<CertificationId> {
        self.state
            .read()
            .skill(skill_id)
            .map(|s| s.certification_ids.clone())
            .unwrap_or_default()
    }

    pub fn get_skill_endorsements(&self, skill_id: SkillId) -> Vec<EndorsementId> {
        self.state
            .read()
            .skill(skill_id)
            .map(|s| s.endorsement_ids.clone())
            .unwrap_or_default()
    }

    pub fn get_employee(&self, id: EmployeeId) -> Option<Employee> {
        self.state.read().employee(id).cloned()
    }

    pub fn get_company(&self, id: CompanyId) -> Option<Company> {
        self.state.read().company(id).cloned()
    }

    pub fn get_experience(&self, id: ExperienceId) -> Option<Experience> {
        self.state.read().experience(id).cloned()
    }

    pub fn get_skill(&self, id: SkillId) -> Option<Skill> {
        self.state.read().skill(id).cloned()
    }

    pub fn get_certification(&self, id: CertificationId) -> Option<Certification> {
        self.state.read().certification(id).cloned()
    }

    pub fn get_endorsement(&self, id: EndorsementId) -> Option<Endorsement> {
        self.state.read().endorsement(id).copied()
    }

    fn company_members(&self, company_id: CompanyId, status: MembershipStatus) -> Vec<EmployeeId> {
        self.state.read().members_with_status(company_id, status)
    }
}
