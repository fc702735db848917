pub mod account;
pub mod experience;
pub mod memory_repo;
pub mod skill;
