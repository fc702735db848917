use crate::{
    entities::{
        certification::{Certification, NewCertification},
        endorsement::Endorsement,
        ids::{CertificationId, EmployeeId, EndorsementId, SkillId},
        skill::Skill,
    },
    repositories::memory_repo::InMemoryRepo,
};

pub trait SkillRepository {
    fn skill(&self, id: SkillId) -> Option<&Skill>;
    fn skill_mut(&mut self, id: SkillId) -> Option<&mut Skill>;
    fn insert_skill(&mut self, employee_id: EmployeeId, name: String) -> SkillId;
    fn certification(&self, id: CertificationId) -> Option<&Certification>;
    fn insert_certification(
        &mut self,
        skill_id: SkillId,
        request: NewCertification,
    ) -> CertificationId;
    fn endorsement(&self, id: EndorsementId) -> Option<&Endorsement>;
    fn insert_endorsement(&mut self, skill_id: SkillId, endorser_id: EmployeeId) -> EndorsementId;
}

impl SkillRepository for InMemoryRepo {
    fn skill(&self, id: SkillId) -> Option<&Skill> {
        self.skills.get(id.index())
    }

    fn skill_mut(&mut self, id: SkillId) -> Option<&mut Skill> {
        self.skills.get_mut(id.index())
    }

    fn insert_skill(&mut self, employee_id: EmployeeId, name: String) -> SkillId {
        let id = SkillId::from_index(self.skills.len());
        self.skills.push(Skill::new(id, employee_id, name));
        id
    }

    fn certification(&self, id: CertificationId) -> Option<&Certification> {
        self.certifications.get(id.index())
    }

    fn insert_certification(
        &mut self,
        skill_id: SkillId,
        request: NewCertification,
    ) -> CertificationId {
        let id = CertificationId::from_index(self.certifications.len());
        self.certifications.push(request.into_certification(id, skill_id));
        id
    }

    fn endorsement(&self, id: EndorsementId) -> Option<&Endorsement> {
        self.endorsements.get(id.index())
    }

    fn insert_endorsement(&mut self, skill_id: SkillId, endorser_id: EmployeeId) -> EndorsementId {
        let id = EndorsementId::from_index(self.endorsements.len());
        self.endorsements.push(Endorsement {
            id,
            skill_id,
            endorser_id,
        });
        id
    }
}
