pub mod layout;
pub mod sections;
pub mod strategy;
