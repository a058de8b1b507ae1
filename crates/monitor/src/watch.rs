//! Subscriber loops that log the simulator's feeds.

use tokio::sync::mpsc::UnboundedReceiver;
use wardlight_events::{AlertUpdate, RosterUpdate};

/// Drain roster updates, logging a summary per tick. Exits when the
/// simulator drops the feed.
pub async fn watch_roster(mut rx: UnboundedReceiver<RosterUpdate>) {
    while let Some(update) = rx.recv().await {
        tracing::info!(
            patient_count = update.patients.len(),
            recorded_at = %update.recorded_at,
            "Roster updated"
        );
    }
    tracing::debug!("Roster feed closed");
}

/// Drain alert updates, logging every critical alert. Exits when the
/// simulator drops the feed.
pub async fn watch_alerts(mut rx: UnboundedReceiver<AlertUpdate>) {
    while let Some(update) = rx.recv().await {
        if update.alerts.is_empty() {
            tracing::debug!("No critical alerts this tick");
            continue;
        }

        for alert in &update.alerts {
            tracing::warn!(
                alert_id = %alert.id,
                patient_id = alert.patient_id,
                message = %alert.message,
                "Critical alert"
            );
        }
    }
    tracing::debug!("Alert feed closed");
}
