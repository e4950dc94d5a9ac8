pub mod billing;
pub mod common;
pub mod establishment;
pub mod financial_report;
pub mod invoice;
pub mod live_score;
pub mod membership;
pub mod mercuriale;
pub mod recipe;
pub mod support;
pub mod user;
