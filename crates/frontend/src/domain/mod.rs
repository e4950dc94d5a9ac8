pub mod billing;
pub mod establishment;
pub mod financial_report;
pub mod invoice;
pub mod membership;
pub mod mercuriale;
pub mod recipe;
pub mod support;
