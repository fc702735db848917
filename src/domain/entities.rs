pub mod account;
pub mod certification;
pub mod company;
pub mod employee;
pub mod endorsement;
pub mod experience;
pub mod ids;
pub mod membership;
pub mod principal;
pub mod skill;
