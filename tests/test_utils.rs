#![allow(dead_code)]

use chainedin::{
    Registry,
    entities::{
        account::{AccountId, AccountKind, SignUpRequest},
        certification::NewCertification,
        experience::NewExperience,
        ids::{CompanyId, EmployeeId},
        principal::Principal,
        skill::VerificationPolicy,
    },
};

pub struct TestRegistry {
    pub registry: Registry,
}

impl TestRegistry {
    pub fn new() -> Self {
        Self::with_policy(VerificationPolicy::Manual)
    }

    pub fn with_policy(policy: VerificationPolicy) -> Self {
        TestRegistry {
            registry: Registry::new(policy),
        }
    }

    pub fn sign_up_employee(&self, caller: &str, email: &str) -> EmployeeId {
        let account = self
            .registry
            .sign_up(
                &principal(caller),
                SignUpRequest::new(email, "Employee", AccountKind::Employee),
            )
            .expect("employee sign up failed");
        match account {
            AccountId::Employee(id) => id,
            other => panic!("expected employee account, got {other}"),
        }
    }

    pub fn sign_up_company(&self, caller: &str, email: &str) -> CompanyId {
        let account = self
            .registry
            .sign_up(&principal(caller), SignUpRequest::new(email, "Company", AccountKind::Company))
            .expect("company sign up failed");
        match account {
            AccountId::Company(id) => id,
            other => panic!("expected company account, got {other}"),
        }
    }
}

pub fn principal(name: &str) -> Principal {
    Principal::new(name)
}

pub fn experience_at(company_id: CompanyId) -> NewExperience {
    NewExperience::new("2020", "2022", "Tester", company_id)
}

pub fn certification() -> NewCertification {
    NewCertification {
        url: "https://certs.example.com/rust/42".to_string(),
        issued_on: "2023-01-15".to_string(),
        valid_till: "2026-01-15".to_string(),
        name: "Rust Associate".to_string(),
        issuer: "Example Academy".to_string(),
    }
}
