pub mod channels;
pub mod customizations;
pub mod dashboard;
pub mod filters;
pub mod health;
pub mod overview;
pub mod products;
pub mod query;
pub mod stores;
pub mod timeseries;
