use serde::{Deserialize, Serialize};

use crate::entities::ids::{CertificationId, SkillId};

/// Provenance attached to a skill. Every field is stored exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Certification {
    pub id: CertificationId,
    pub skill_id: SkillId,
    pub url: String,
    pub issued_on: String,
    pub valid_till: String,
    pub name: String,
    pub issuer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewCertification {
    pub url: String,
    pub issued_on: String,
    pub valid_till: String,
    pub name: String,
    pub issuer: String,
}

impl NewCertification {
    pub fn into_certification(self, id: CertificationId, skill_id: SkillId) -> Certification {
        Certification {
            id,
            skill_id,
            url: self.url,
            issued_on: self.issued_on,
            valid_till: self.valid_till,
            name: self.name,
            issuer: self.issuer,
        }
    }
}
