use crate::{
    entities::{
        certification::NewCertification,
        ids::{CertificationId, EmployeeId, EndorsementId, SkillId},
        principal::Principal,
        skill::VerificationPolicy,
    },
    errors::{Reference, RegistryError},
    middlewares::guard::AuthorizationGuard,
    repositories::{account::AccountRepository, skill::SkillRepository},
};

/// Skill declarations and the credentials attached to them.
pub struct SkillRegistry<'a, R>
where
    R: AccountRepository + SkillRepository,
{
    pub repo: &'a mut R,
    pub policy: VerificationPolicy,
}

impl<'a, R> SkillRegistry<'a, R>
where
    R: AccountRepository + SkillRepository,
{
    pub fn new(repo: &'a mut R, policy: VerificationPolicy) -> Self {
        SkillRegistry { repo, policy }
    }

    pub fn add_skill(
        &mut self,
        caller: &Principal,
        employee_id: EmployeeId,
        name: String,
    ) -> Result<SkillId, RegistryError> {
        AuthorizationGuard::new(&*self.repo).caller_controls_employee(caller, employee_id)?;

        let skill_id = self.repo.insert_skill(employee_id, name);
        if let Some(employee) = self.repo.employee_mut(employee_id) {
            employee.skill_ids.push(skill_id);
        }

        tracing::info!(%employee_id, %skill_id, "Skill added");
        Ok(skill_id)
    }

    /// Attaches a certification to a skill owned by an employee the caller controls.
    pub fn add_certification(
        &mut self,
        caller: &Principal,
        skill_id: SkillId,
        request: NewCertification,
    ) -> Result<CertificationId, RegistryError> {
        let owner = self.skill_owner(skill_id)?;
        AuthorizationGuard::new(&*self.repo).caller_controls_employee(caller, owner)?;

        let certification_id = self.repo.insert_certification(skill_id, request);
        if let Some(skill) = self.repo.skill_mut(skill_id) {
            skill.certification_ids.push(certification_id);
        }

        tracing::info!(%skill_id, %certification_id, "Certification added");
        Ok(certification_id)
    }

    /// Records `endorser_id`'s attestation toward someone else's skill and
    /// applies the verification policy.
    pub fn add_endorsement(
        &mut self,
        caller: &Principal,
        skill_id: SkillId,
        endorser_id: EmployeeId,
    ) -> Result<EndorsementId, RegistryError> {
        let owner = self.skill_owner(skill_id)?;
        AuthorizationGuard::new(&*self.repo).caller_controls_employee(caller, endorser_id)?;

        if owner == endorser_id {
            return Err(RegistryError::SelfEndorsement(skill_id));
        }
        if self.endorsers(skill_id).contains(&endorser_id) {
            return Err(RegistryError::DuplicateEndorsement {
                skill: skill_id,
                endorser: endorser_id,
            });
        }

        let endorsement_id = self.repo.insert_endorsement(skill_id, endorser_id);
        let policy = self.policy;
        if let Some(skill) = self.repo.skill_mut(skill_id) {
            skill.endorsement_ids.push(endorsement_id);
            if !skill.is_verified && policy.is_satisfied(skill.endorsement_ids.len()) {
                skill.is_verified = true;
                tracing::info!(%skill_id, "Skill verified by endorsements");
            }
        }

        tracing::info!(%skill_id, %endorser_id, %endorsement_id, "Endorsement added");
        Ok(endorsement_id)
    }

    fn skill_owner(&self, skill_id: SkillId) -> Result<EmployeeId, RegistryError> {
        self.repo
            .skill(skill_id)
            .map(|s| s.employee_id)
            .ok_or(RegistryError::UnknownReference(Reference::Skill(skill_id)))
    }

    fn endorsers(&self, skill_id: SkillId) -> Vec<EmployeeId> {
        let Some(skill) = self.repo.skill(skill_id) else {
            return Vec::new();
        };
        skill
            .endorsement_ids
            .iter()
            .filter_map(|id| self.repo.endorsement(*id))
            .map(|e| e.endorser_id)
            .collect()
    }
}
