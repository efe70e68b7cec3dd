//! Per-branch processing stages feeding the merged query stream.

use std::time::Duration;

use log::debug;
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::events::{QueryBranch, QueryEvent};

fn log_event(event: &QueryEvent) {
    debug!(
        "query event: {}",
        serde_json::to_string(event).unwrap_or_default()
    );
}

/// Filter applied to the text branch before debouncing.
pub(crate) fn accepts_query(query: &str, min_query_chars: usize) -> bool {
    query.trim().chars().count() > min_query_chars
}

/// Forwards button emissions into the merged stream unchanged.
pub(crate) async fn run_button_branch(
    mut rx: mpsc::UnboundedReceiver<String>,
    merged_tx: mpsc::UnboundedSender<(QueryBranch, String)>,
) {
    while let Some(query) = rx.recv().await {
        log_event(&QueryEvent::accepted(QueryBranch::Button, query.clone()));
        if merged_tx.send((QueryBranch::Button, query)).is_err() {
            return;
        }
    }
}

/// Filter + keep-latest debounce for the text branch.
///
/// A value enters the debounce stage only if its trimmed length exceeds
/// `min_query_chars`; filtered values do not touch the quiet timer. An
/// accepted value is forwarded once no further accepted value arrives for
/// `quiet_interval`, so only the last value of a burst survives. When the
/// branch closes with a value still pending, the pending value is dropped:
/// closure only happens at teardown and nothing may be delivered after
/// teardown.
pub(crate) async fn run_text_branch(
    mut rx: mpsc::UnboundedReceiver<String>,
    merged_tx: mpsc::UnboundedSender<(QueryBranch, String)>,
    quiet_interval: Duration,
    min_query_chars: usize,
) {
    let mut pending: Option<(String, Instant)> = None;

    loop {
        let deadline = pending.as_ref().map(|(_, deadline)| *deadline);

        if let Some(deadline) = deadline {
            tokio::select! {
                value = rx.recv() => match value {
                    Some(query) => accept(&mut pending, query, quiet_interval, min_query_chars),
                    None => return,
                },
                _ = tokio::time::sleep_until(deadline) => {
                    if let Some((query, _)) = pending.take() {
                        log_event(&QueryEvent::accepted(QueryBranch::Text, query.clone()));
                        if merged_tx.send((QueryBranch::Text, query)).is_err() {
                            return;
                        }
                    }
                }
            }
        } else {
            match rx.recv().await {
                Some(query) => accept(&mut pending, query, quiet_interval, min_query_chars),
                None => return,
            }
        }
    }
}

fn accept(
    pending: &mut Option<(String, Instant)>,
    query: String,
    quiet_interval: Duration,
    min_query_chars: usize,
) {
    if accepts_query(&query, min_query_chars) {
        *pending = Some((query, Instant::now() + quiet_interval));
    } else {
        log_event(&QueryEvent::discarded(QueryBranch::Text, query));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const QUIET: Duration = Duration::from_millis(1000);

    fn spawn_text_branch() -> (
        mpsc::UnboundedSender<String>,
        mpsc::UnboundedReceiver<(QueryBranch, String)>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (merged_tx, merged_rx) = mpsc::unbounded_channel();
        tokio::spawn(run_text_branch(rx, merged_tx, QUIET, 2));
        (tx, merged_rx)
    }

    #[test]
    fn test_filter_requires_trimmed_length_above_minimum() {
        assert!(!accepts_query("", 2));
        assert!(!accepts_query("br", 2));
        assert!(!accepts_query("  br  ", 2));
        assert!(!accepts_query("   ", 2));
        assert!(accepts_query("bri", 2));
        assert!(accepts_query(" brie ", 2));
    }

    proptest! {
        #[test]
        fn prop_whitespace_padding_never_changes_acceptance(
            query in ".*",
            pad in "[ \t]{0,6}",
        ) {
            let padded = format!("{pad}{query}{pad}");
            prop_assert_eq!(accepts_query(&padded, 2), accepts_query(&query, 2));
        }

        #[test]
        fn prop_short_queries_always_rejected(query in "[a-z]{0,2}") {
            prop_assert!(!accepts_query(&query, 2));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_last_value() {
        let (tx, mut merged_rx) = spawn_text_branch();

        tx.send("bri".to_string()).unwrap();
        tokio::time::sleep(Duration::from_millis(300)).await;
        tx.send("brie".to_string()).unwrap();
        tokio::time::sleep(Duration::from_millis(1100)).await;

        assert_eq!(
            merged_rx.try_recv().unwrap(),
            (QueryBranch::Text, "brie".to_string())
        );
        assert!(merged_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_values_spaced_beyond_quiet_interval_both_pass() {
        let (tx, mut merged_rx) = spawn_text_branch();

        tx.send("brie".to_string()).unwrap();
        tokio::time::sleep(Duration::from_millis(1100)).await;
        tx.send("cheddar".to_string()).unwrap();
        tokio::time::sleep(Duration::from_millis(1100)).await;

        assert_eq!(
            merged_rx.try_recv().unwrap(),
            (QueryBranch::Text, "brie".to_string())
        );
        assert_eq!(
            merged_rx.try_recv().unwrap(),
            (QueryBranch::Text, "cheddar".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_filtered_value_does_not_reset_quiet_timer() {
        let (tx, mut merged_rx) = spawn_text_branch();

        tx.send("brie".to_string()).unwrap();
        tokio::time::sleep(Duration::from_millis(600)).await;
        tx.send("br".to_string()).unwrap();
        tokio::time::sleep(Duration::from_millis(600)).await;

        // 1200ms after "brie" with the short "br" ignored in between
        assert_eq!(
            merged_rx.try_recv().unwrap(),
            (QueryBranch::Text, "brie".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_with_pending_value_drops_it() {
        let (tx, mut merged_rx) = spawn_text_branch();

        tx.send("brie".to_string()).unwrap();
        tokio::time::sleep(Duration::from_millis(500)).await;
        drop(tx);
        tokio::time::sleep(Duration::from_millis(2000)).await;

        assert!(merged_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_button_branch_forwards_in_order() {
        let (tx, rx) = mpsc::unbounded_channel();
        let (merged_tx, mut merged_rx) = mpsc::unbounded_channel();
        tokio::spawn(run_button_branch(rx, merged_tx));

        tx.send("b".to_string()).unwrap();
        tx.send("brie".to_string()).unwrap();

        assert_eq!(
            merged_rx.recv().await.unwrap(),
            (QueryBranch::Button, "b".to_string())
        );
        assert_eq!(
            merged_rx.recv().await.unwrap(),
            (QueryBranch::Button, "brie".to_string())
        );
    }
}
