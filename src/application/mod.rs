mod id;
mod record;
mod status;

pub use id::ApplicationId;
pub use record::{JobApplication, NewApplication};
pub use status::ApplicationStatus;
