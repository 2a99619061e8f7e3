//! Store operations per entity. Each mutating call commits exactly one transaction.

mod activities;
mod campers;
mod signups;
pub use activities::ActivityService;
pub use campers::CamperService;
pub use signups::SignupService;
