pub mod resource;
pub mod roadmap;

pub use resource::Resource;
pub use roadmap::{Milestone, ResourceLink, Roadmap};
