pub use pondlife_core::{GeneticsLogic, PondEngine, PondError, PondSnapshot};
pub mod config {
    pub use pondlife_core::config::*;
}
pub mod collaborators {
    pub use pondlife_core::collaborators::*;
}
pub mod daily {
    pub use pondlife_core::daily::*;
}
pub mod genetics {
    pub use pondlife_core::genetics::*;
}
pub mod metrics {
    pub use pondlife_core::metrics::*;
}
pub mod pedigree {
    pub use pondlife_core::pedigree::*;
}
pub mod persistence {
    pub use pondlife_io::persistence::*;
    pub use pondlife_io::{IoError, Result};
}
pub mod state {
    pub use pondlife_data::*;
}
