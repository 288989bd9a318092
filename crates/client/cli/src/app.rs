//! Wires the runtime to the terminal frontend.

use anyhow::Result;

use schulte_runtime::Runtime;

use crate::config::CliArgs;
use crate::event::EventLoop;
use crate::presentation::terminal::{self, TerminalGuard};
use crate::state::AppState;

pub struct App {
    args: CliArgs,
}

impl App {
    pub fn new(args: CliArgs) -> Self {
        Self { args }
    }

    pub async fn run(self) -> Result<()> {
        let mut builder = Runtime::builder().config(self.args.session_config());
        if let Some(seed) = self.args.seed {
            builder = builder.seed(seed);
        }
        let runtime = builder.build();
        let handle = runtime.handle();

        let snapshot = handle.query_snapshot().await?;
        tracing::info!(grid_size = snapshot.grid_size, "session ready");

        let mut terminal = terminal::init()?;
        let _guard = TerminalGuard;

        let result = EventLoop::new(handle, AppState::new(snapshot))
            .run(&mut terminal)
            .await;

        runtime.shutdown().await;
        result
    }
}
