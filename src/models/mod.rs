//! Takt planning domain models.
//!
//! | takt-plan | Construction site |
//! |-----------|-------------------|
//! | Floor | Storey / level |
//! | WorkItem | Trade package |
//! | LaborRates | Daily crew cost table |

mod labor;
mod project;

pub use labor::{LaborRates, DEFAULT_DAILY_RATE};
pub use project::{Floor, ProjectInput, WorkItem};
