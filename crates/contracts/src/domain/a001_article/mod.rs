pub mod aggregate;
pub mod topic;
