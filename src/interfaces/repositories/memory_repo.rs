use std::collections::{BTreeMap, HashMap};

use crate::entities::{
    account::AccountId,
    certification::Certification,
    company::Company,
    employee::Employee,
    endorsement::Endorsement,
    experience::Experience,
    ids::{CompanyId, EmployeeId},
    membership::MembershipStatus,
    skill::Skill,
};

/// In-memory registry tables.
///
/// Each table is a `Vec` whose slot `i` holds the record with id `i + 1`, so the
/// zero sentinel never addresses a live record. Records are never removed.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRepo {
    pub(super) employees: Vec<Employee>,
    pub(super) companies: Vec<Company>,
    pub(super) experiences: Vec<Experience>,
    pub(super) skills: Vec<Skill>,
    pub(super) certifications: Vec<Certification>,
    pub(super) endorsements: Vec<Endorsement>,
    /// Shared email namespace of both account kinds.
    pub(super) emails: HashMap<String, AccountId>,
    pub(super) memberships: BTreeMap<(CompanyId, EmployeeId), MembershipStatus>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        InMemoryRepo::default()
    }
}
