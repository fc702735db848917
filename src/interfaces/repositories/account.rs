use crate::{
    entities::{
        account::AccountId,
        company::Company,
        employee::Employee,
        ids::{CompanyId, EmployeeId},
        principal::Principal,
    },
    repositories::memory_repo::InMemoryRepo,
};

/// Read-only view of the account tables used for authorization decisions.
#[cfg_attr(test, mockall::automock)]
pub trait AccountDirectory {
    fn employee_principal(&self, id: EmployeeId) -> Option<Principal>;

    fn company_principal(&self, id: CompanyId) -> Option<Principal>;

    /// `None` for an unknown employee, `Some(None)` for an unaffiliated one.
    fn employee_company(&self, id: EmployeeId) -> Option<Option<CompanyId>>;

    fn companies_controlled_by(&self, principal: &Principal) -> Vec<CompanyId>;
}

pub trait AccountRepository: AccountDirectory {
    fn account_by_email(&self, email: &str) -> Option<AccountId>;
    fn employee(&self, id: EmployeeId) -> Option<&Employee>;
    fn employee_mut(&mut self, id: EmployeeId) -> Option<&mut Employee>;
    fn company(&self, id: CompanyId) -> Option<&Company>;
    fn company_mut(&mut self, id: CompanyId) -> Option<&mut Company>;
    fn insert_employee(&mut self, name: String, email: String, principal: Principal) -> EmployeeId;
    fn insert_company(&mut self, name: String, email: String, principal: Principal) -> CompanyId;
}

impl AccountDirectory for InMemoryRepo {
    fn employee_principal(&self, id: EmployeeId) -> Option<Principal> {
        self.employee(id).map(|e| e.principal.clone())
    }

    fn company_principal(&self, id: CompanyId) -> Option<Principal> {
        self.company(id).map(|c| c.principal.clone())
    }

    fn employee_company(&self, id: EmployeeId) -> Option<Option<CompanyId>> {
        self.employee(id).map(|e| e.company_id)
    }

    fn companies_controlled_by(&self, principal: &Principal) -> Vec<CompanyId> {
        self.companies
            .iter()
            .filter(|c| &c.principal == principal)
            .map(|c| c.id)
            .collect()
    }
}

impl AccountRepository for InMemoryRepo {
    fn account_by_email(&self, email: &str) -> Option<AccountId> {
        self.emails.get(email).copied()
    }

    fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(id.index())
    }

    fn employee_mut(&mut self, id: EmployeeId) -> Option<&mut Employee> {
        self.employees.get_mut(id.index())
    }

    fn company(&self, id: CompanyId) -> Option<&Company> {
        self.companies.get(id.index())
    }

    fn company_mut(&mut self, id: CompanyId) -> Option<&mut Company> {
        self.companies.get_mut(id.index())
    }

    fn insert_employee(&mut self, name: String, email: String, principal: Principal) -> EmployeeId {
        let id = EmployeeId::from_index(self.employees.len());
        self.emails.insert(email.clone(), AccountId::Employee(id));
        self.employees.push(Employee::new(id, name, email, principal));
        id
    }

    fn insert_company(&mut self, name: String, email: String, principal: Principal) -> CompanyId {
        let id = CompanyId::from_index(self.companies.len());
        self.emails.insert(email.clone(), AccountId::Company(id));
        self.companies.push(Company::new(id, name, email, principal));
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_assigned_per_kind_from_one() {
        let mut repo = InMemoryRepo::new();
        let alice = Principal::new("alice");

        let employee = repo.insert_employee("E".into(), "e@c.com".into(), alice.clone());
        let company = repo.insert_company("Co".into(), "co@c.com".into(), alice.clone());
        let second = repo.insert_employee("F".into(), "f@c.com".into(), alice);

        assert_eq!(employee.get(), 1);
        assert_eq!(company.get(), 1);
        assert_eq!(second.get(), 2);
        assert_eq!(repo.account_by_email("co@c.com"), Some(AccountId::Company(company)));
    }

    #[test]
    fn directory_resolves_controllers() {
        let mut repo = InMemoryRepo::new();
        let owner = Principal::new("owner");
        let company = repo.insert_company("Co".into(), "co@c.com".into(), owner.clone());
        let employee = repo.insert_employee("E".into(), "e@c.com".into(), Principal::new("e"));

        assert_eq!(repo.companies_controlled_by(&owner), vec![company]);
        assert!(repo.companies_controlled_by(&Principal::new("e")).is_empty());
        assert_eq!(repo.employee_company(employee), Some(None));
        assert_eq!(repo.employee_company(EmployeeId::new(5).unwrap()), None);
    }
}
