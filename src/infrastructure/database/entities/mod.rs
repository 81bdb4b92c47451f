//! SeaORM entities

pub mod student;
