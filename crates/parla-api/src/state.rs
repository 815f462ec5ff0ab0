use std::sync::Arc;

use parla_db::MessageStore;
use parla_types::time::TimestampFormat;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Arc<dyn MessageStore>,
    pub time_format: TimestampFormat,
}
