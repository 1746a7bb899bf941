mod candidate;
mod data_stores;
mod error;
mod member;
mod member_name;
mod member_project;
mod project;
mod project_name;
mod role;

pub use candidate::*;
pub use data_stores::*;
pub use error::*;
pub use member::*;
pub use member_name::*;
pub use member_project::*;
pub use project::*;
pub use project_name::*;
pub use role::*;
