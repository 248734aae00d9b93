use std::sync::Arc;
use std::time::Duration;

use ciarp_assist::TextGenerator;
use ciarp_serve::{AppState, ServeConfig};
use ciarp_store::ConversationStore;

pub fn execute(
    store: ConversationStore,
    generator: Arc<dyn TextGenerator>,
    bind: &str,
    port: u16,
    tick_ms: u64,
) -> anyhow::Result<()> {
    let config = ServeConfig {
        bind: bind.to_string(),
        port,
        tick: Duration::from_millis(tick_ms.max(1)),
    };
    let state = AppState::new(store, generator);
    tokio::runtime::Runtime::new()?.block_on(ciarp_serve::serve(state, config))
}
