pub mod assignments;
pub mod data_stores;
pub mod reporter;
pub mod seeder;
