mod test_utils;

use std::num::NonZeroU32;

use chainedin::{
    entities::{
        ids::{CertificationId, EmployeeId, SkillId},
        skill::VerificationPolicy,
    },
    errors::{Reference, RegistryError},
};
use test_utils::*;

#[test]
fn add_skill_appends_to_employee_skills() {
    let app = TestRegistry::new();
    let employee = app.sign_up_employee("alice", "e@c.com");

    let rust = app.registry.add_skill(&principal("alice"), employee, "Rust").unwrap();
    let sql = app.registry.add_skill(&principal("alice"), employee, "SQL").unwrap();

    assert_eq!(rust, SkillId::new(1).unwrap());
    assert_eq!(app.registry.get_employee_skills(employee), vec![rust, sql]);
    let skill = app.registry.get_skill(rust).unwrap();
    assert_eq!(skill.name, "Rust");
    assert_eq!(skill.employee_id, employee);
    assert!(!skill.is_verified);
}

#[test]
fn add_skill_requires_employee_controller() {
    let app = TestRegistry::new();
    let employee = app.sign_up_employee("alice", "e@c.com");

    let result = app.registry.add_skill(&principal("mallory"), employee, "Rust");

    assert!(matches!(result, Err(RegistryError::NotAccountController(_))));
    assert!(app.registry.get_employee_skills(employee).is_empty());
}

#[test]
fn certification_fields_round_trip() {
    let app = TestRegistry::new();
    let employee = app.sign_up_employee("alice", "e@c.com");
    let skill = app.registry.add_skill(&principal("alice"), employee, "Rust").unwrap();

    let certification_id = app
        .registry
        .add_certification(&principal("alice"), skill, certification())
        .unwrap();

    assert_eq!(app.registry.get_skill_certifications(skill), vec![certification_id]);
    let stored = app.registry.get_certification(certification_id).unwrap();
    let supplied = certification();
    assert_eq!(stored.skill_id, skill);
    assert_eq!(stored.url, supplied.url);
    assert_eq!(stored.issued_on, supplied.issued_on);
    assert_eq!(stored.valid_till, supplied.valid_till);
    assert_eq!(stored.name, supplied.name);
    assert_eq!(stored.issuer, supplied.issuer);
}

#[test]
fn certification_requires_existing_skill() {
    let app = TestRegistry::new();
    app.sign_up_employee("alice", "e@c.com");
    let missing = SkillId::new(4).unwrap();

    assert_eq!(
        app.registry.add_certification(&principal("alice"), missing, certification()),
        Err(RegistryError::UnknownReference(Reference::Skill(missing)))
    );
    assert!(app.registry.get_certification(CertificationId::new(1).unwrap()).is_none());
}

#[test]
fn certification_requires_skill_owner() {
    let app = TestRegistry::new();
    let alice = app.sign_up_employee("alice", "alice@c.com");
    app.sign_up_employee("bob", "bob@c.com");
    let skill = app.registry.add_skill(&principal("alice"), alice, "Rust").unwrap();

    let result = app.registry.add_certification(&principal("bob"), skill, certification());

    assert!(matches!(result, Err(RegistryError::NotAccountController(_))));
    assert!(app.registry.get_skill_certifications(skill).is_empty());
}

#[test]
fn endorsements_are_recorded_without_verifying_under_manual_policy() {
    let app = TestRegistry::new();
    let alice = app.sign_up_employee("alice", "alice@c.com");
    let bob = app.sign_up_employee("bob", "bob@c.com");
    let skill = app.registry.add_skill(&principal("alice"), alice, "Rust").unwrap();

    let endorsement = app.registry.add_endorsement(&principal("bob"), skill, bob).unwrap();

    assert_eq!(app.registry.get_skill_endorsements(skill), vec![endorsement]);
    let stored = app.registry.get_endorsement(endorsement).unwrap();
    assert_eq!(stored.skill_id, skill);
    assert_eq!(stored.endorser_id, bob);
    assert!(!app.registry.get_skill(skill).unwrap().is_verified);
}

#[test]
fn endorsement_threshold_verifies_skill() {
    let threshold = NonZeroU32::new(2).unwrap();
    let app = TestRegistry::with_policy(VerificationPolicy::Endorsements(threshold));
    let alice = app.sign_up_employee("alice", "alice@c.com");
    let bob = app.sign_up_employee("bob", "bob@c.com");
    let carol = app.sign_up_employee("carol", "carol@c.com");
    let skill = app.registry.add_skill(&principal("alice"), alice, "Rust").unwrap();

    app.registry.add_endorsement(&principal("bob"), skill, bob).unwrap();
    assert!(!app.registry.get_skill(skill).unwrap().is_verified);

    app.registry.add_endorsement(&principal("carol"), skill, carol).unwrap();
    assert!(app.registry.get_skill(skill).unwrap().is_verified);
}

#[test]
fn endorsement_restrictions() {
    let threshold = NonZeroU32::new(1).unwrap();
    let app = TestRegistry::with_policy(VerificationPolicy::Endorsements(threshold));
    let alice = app.sign_up_employee("alice", "alice@c.com");
    let bob = app.sign_up_employee("bob", "bob@c.com");
    let skill = app.registry.add_skill(&principal("alice"), alice, "Rust").unwrap();

    assert_eq!(
        app.registry.add_endorsement(&principal("alice"), skill, alice),
        Err(RegistryError::SelfEndorsement(skill))
    );
    assert!(matches!(
        app.registry.add_endorsement(&principal("alice"), skill, bob),
        Err(RegistryError::NotAccountController(_))
    ));
    let ghost = EmployeeId::new(9).unwrap();
    assert_eq!(
        app.registry.add_endorsement(&principal("bob"), skill, ghost),
        Err(RegistryError::UnknownReference(Reference::Employee(ghost)))
    );
    assert!(!app.registry.get_skill(skill).unwrap().is_verified);

    app.registry.add_endorsement(&principal("bob"), skill, bob).unwrap();
    assert_eq!(
        app.registry.add_endorsement(&principal("bob"), skill, bob),
        Err(RegistryError::DuplicateEndorsement {
            skill,
            endorser: bob
        })
    );
    assert_eq!(app.registry.get_skill_endorsements(skill).len(), 1);
    assert!(app.registry.get_skill(skill).unwrap().is_verified);
}

#[test]
fn skill_queries_on_unknown_ids_are_empty() {
    let app = TestRegistry::new();

    assert!(app.registry.get_employee_skills(EmployeeId::new(1).unwrap()).is_empty());
    assert!(app.registry.get_skill_certifications(SkillId::new(1).unwrap()).is_empty());
    assert!(app.registry.get_skill_endorsements(SkillId::new(1).unwrap()).is_empty());
}
