pub mod assessment;
pub mod assignment;
pub mod child;
pub mod curriculum;
pub mod medical_history;
pub mod report;
pub mod screening;
