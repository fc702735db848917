use validator::Validate;

use crate::{
    entities::{
        account::{AccountId, AccountKind, SignUpRequest},
        principal::Principal,
    },
    errors::RegistryError,
    middlewares::guard::AuthorizationGuard,
    repositories::account::AccountRepository,
};

/// Account creation and principal-to-account binding.
pub struct IdentityRegistry<'a, R>
where
    R: AccountRepository,
{
    pub repo: &'a mut R,
}

impl<'a, R> IdentityRegistry<'a, R>
where
    R: AccountRepository,
{
    pub fn new(repo: &'a mut R) -> Self {
        IdentityRegistry { repo }
    }

    /// Creates an employee or company account controlled by `caller`.
    pub fn sign_up(
        &mut self,
        caller: &Principal,
        request: SignUpRequest,
    ) -> Result<AccountId, RegistryError> {
        request.validate()?;

        if self.repo.account_by_email(&request.email).is_some() {
            tracing::warn!(email = %request.email, "Sign up rejected: email already registered");
            return Err(RegistryError::DuplicateEmail(request.email));
        }

        let SignUpRequest { email, name, kind } = request;
        let account = match kind {
            AccountKind::Employee => {
                AccountId::Employee(self.repo.insert_employee(name, email, caller.clone()))
            }
            AccountKind::Company => {
                AccountId::Company(self.repo.insert_company(name, email, caller.clone()))
            }
        };

        tracing::info!(%account, %caller, "Account created");
        Ok(account)
    }

    /// Resolves `email` to the account `caller` currently controls.
    pub fn authenticate(
        &self,
        caller: &Principal,
        email: &str,
    ) -> Result<AccountId, RegistryError> {
        resolve_controlled_account(&*self.repo, caller, email)
    }

    /// Hands control of an account to `new_principal`. Only the current
    /// controller may do this.
    pub fn update_controlling_principal(
        &mut self,
        caller: &Principal,
        kind: AccountKind,
        email: &str,
        new_principal: Principal,
    ) -> Result<(), RegistryError> {
        let account = self.authenticate(caller, email)?;
        if account.kind() != kind {
            tracing::warn!(%account, %kind, "Account kind mismatch on principal update");
            return Err(RegistryError::AuthenticationFailed);
        }

        match account {
            AccountId::Employee(id) => {
                if let Some(employee) = self.repo.employee_mut(id) {
                    employee.principal = new_principal.clone();
                }
            }
            AccountId::Company(id) => {
                if let Some(company) = self.repo.company_mut(id) {
                    company.principal = new_principal.clone();
                }
            }
        }

        tracing::info!(
            %account,
            from = %caller,
            to = %new_principal,
            "Controlling principal updated"
        );
        Ok(())
    }
}

/// Looks up `email` and checks that `caller` controls the account behind it.
/// Unknown emails and foreign callers fail identically.
pub fn resolve_controlled_account<R>(
    repo: &R,
    caller: &Principal,
    email: &str,
) -> Result<AccountId, RegistryError>
where
    R: AccountRepository + ?Sized,
{
    let account = repo
        .account_by_email(email)
        .ok_or(RegistryError::AuthenticationFailed)?;

    AuthorizationGuard::new(repo)
        .caller_controls(caller, account)
        .map_err(|_| RegistryError::AuthenticationFailed)?;

    Ok(account)
}
