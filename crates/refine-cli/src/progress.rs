//! Progress bar rendering over the sequencer's watch channel.

use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::watch;

use refine_model::{ProcessingPhase, ProcessingState};

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} ({percent}%) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

/// Render progress snapshots until the batch reaches a terminal phase or
/// the sequencer drops its sender.
pub async fn render_progress(mut rx: watch::Receiver<ProcessingState>) {
    let bar = ProgressBar::new(rx.borrow().total_rows as u64);
    bar.set_style(bar_style());

    loop {
        let terminal = {
            let state = rx.borrow_and_update();
            bar.set_length(state.total_rows as u64);
            bar.set_position(state.processed_rows as u64);
            match state.phase {
                ProcessingPhase::Completed => bar.finish_with_message("הסתיים"),
                ProcessingPhase::Error => {
                    let message = state.error_message.clone().unwrap_or_default();
                    bar.abandon_with_message(message);
                }
                _ => {}
            }
            state.is_terminal()
        };
        if terminal || rx.changed().await.is_err() {
            break;
        }
    }
}
