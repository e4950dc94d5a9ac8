pub mod details;

pub use details::EstablishmentSettings;
