pub mod employee;
pub mod healthcheck;
