//! Root state: the single directory every note and folder operation is
//! confined to, plus the collaborators that persist and pick it.

pub mod picker;
pub mod state;
pub mod storage;

pub use picker::{DirectoryPicker, FixedPicker, PromptPicker};
pub use state::{RootSelection, RootState, ROOT_KEY};
pub use storage::{EnvRootStorage, MemoryRootStorage, RootStorage, XdgRootStorage};
