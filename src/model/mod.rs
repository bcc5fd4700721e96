pub mod epic;
pub mod issue;

pub use epic::{Epic, EpicSummary};
pub use issue::Issue;
