//! Music folder scanning and the playlist built from it.

mod display;
mod model;
mod picker;
mod playlist;
mod scan;

pub use display::display_name;
pub use model::Track;
pub use picker::{DirectoryPicker, PickOutcome};
pub use playlist::PlaylistManager;
pub use scan::{DirectoryListing, WalkDirListing, is_supported, normalize_extensions};
