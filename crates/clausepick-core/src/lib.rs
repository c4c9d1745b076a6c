pub mod actions;
pub mod clause;
pub mod page;
pub mod search;
pub mod selection;
pub mod view;
pub mod workbench;

pub use actions::{Clipboard, ClipboardError, Level, Notification};
pub use clause::{ClauseDataset, ClauseKey, ClauseRecord};
pub use page::{Page, PageView};
pub use search::{MatchFields, SearchConfig, SearchQuery, search};
pub use selection::{SelectionError, SelectionStore};
pub use view::{ResultItem, ResultView, TableRow, TableView};
pub use workbench::{SearchState, Workbench};
