//! Command-line options mapped onto the core session configuration.

use clap::Parser;
use schulte_core::SessionConfig;

/// Schulte table trainer for the terminal.
#[derive(Debug, Parser)]
#[command(name = "schulte", version, about)]
pub struct CliArgs {
    /// Grid side length (2-9; out-of-range values are clamped)
    #[arg(short = 'g', long, default_value_t = SessionConfig::DEFAULT_GRID_SIZE)]
    pub grid_size: u8,

    /// Number of interleaved counting sequences (1-5)
    #[arg(short = 'n', long, default_value_t = 1)]
    pub groups: u8,

    /// Run odd-indexed groups (or a lone group) high-to-low
    #[arg(long)]
    pub inverse: bool,

    /// Traverse groups center-outward
    #[arg(long)]
    pub divergent: bool,

    /// Cycle all four traversal rules across groups
    #[arg(long)]
    pub varied: bool,

    /// Play against a countdown; tables rebuild when cleared
    #[arg(short = 't', long)]
    pub timed: bool,

    /// Countdown length in minutes
    #[arg(long, default_value_t = SessionConfig::DEFAULT_TIMER_MINUTES)]
    pub minutes: u16,

    /// Re-shuffle the table after every correct selection
    #[arg(long)]
    pub shuffle_on_correct: bool,

    /// Record pointer movement for the mousemap view
    #[arg(long)]
    pub tracking: bool,

    /// Rotate symbols by random quarter turns
    #[arg(long)]
    pub turn_symbols: bool,

    /// Mark symbols with a spin direction
    #[arg(long)]
    pub spin_symbols: bool,

    /// Fixed seed for a reproducible table layout
    #[arg(long)]
    pub seed: Option<u64>,
}

impl CliArgs {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            grid_size: self.grid_size,
            group_count: self.groups,
            inverse: self.inverse,
            divergent: self.divergent,
            varied_modes: self.varied,
            timed: self.timed,
            timer_minutes: self.minutes,
            shuffle_on_correct: self.shuffle_on_correct,
            tracking: self.tracking,
            turn_symbols: self.turn_symbols,
            spin_symbols: self.spin_symbols,
        }
        .clamped()
    }
}
