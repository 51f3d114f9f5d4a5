pub mod callbacks;
pub mod cards;
pub mod payments;
pub mod reports;
pub mod signing;
