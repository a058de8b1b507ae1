//! `wardlight-monitor` -- patient-monitoring demo service.
//!
//! Loads a patient roster, logs each patient's derived status, then runs
//! the vitals simulator: every tick perturbs the roster's vitals and the
//! subscriber tasks log roster updates and critical alerts until the
//! process receives SIGINT or SIGTERM.
//!
//! # Environment variables
//!
//! | Variable      | Required | Default                 | Description                          |
//! |---------------|----------|-------------------------|--------------------------------------|
//! | `ROSTER_PATH` | no       | (embedded demo roster)  | Path to a roster JSON document       |
//! | `TICK_SECS`   | no       | `60`                    | Seconds between simulation ticks     |
//! | `SIM_SEED`    | no       | (OS entropy)            | Fixed RNG seed for reproducible runs |

use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wardlight_core::{parse_roster, status_color, AlertEngine, PatientDirectory};
use wardlight_monitor::config::MonitorConfig;
use wardlight_monitor::{watch, DEMO_ROSTER};
use wardlight_sim::VitalsSimulator;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wardlight_monitor=info,wardlight_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = MonitorConfig::from_env();

    let roster_json = match &config.roster_path {
        Some(path) => std::fs::read_to_string(path).unwrap_or_else(|e| {
            tracing::error!(path = %path.display(), error = %e, "Failed to read roster document");
            std::process::exit(1);
        }),
        None => DEMO_ROSTER.to_string(),
    };

    let patients = parse_roster(&roster_json).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid roster document");
        std::process::exit(1);
    });

    tracing::info!(
        patient_count = patients.len(),
        tick_secs = config.tick_secs,
        seeded = config.seed.is_some(),
        "Starting wardlight-monitor",
    );

    // Log the initial state of every patient before the simulation drifts.
    let engine = AlertEngine::new();
    let directory = PatientDirectory::new(patients.clone(), &engine);
    for patient in directory.all() {
        match directory.status_of(patient) {
            Ok(status) => tracing::info!(
                patient_id = patient.id,
                name = %format!("{} {}", patient.first_name, patient.last_name),
                status = status.as_str(),
                color = status_color(Some(status)),
                "Patient status"
            ),
            Err(e) => tracing::warn!(patient_id = patient.id, error = %e, "No status available"),
        }
    }

    match directory.critical_alerts() {
        Ok(alerts) if !alerts.is_empty() => {
            tracing::warn!(count = alerts.len(), "Critical alerts at startup");
        }
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "Alert sweep failed at startup"),
    }

    let simulator = VitalsSimulator::with_options(
        AlertEngine::new(),
        Duration::from_secs(config.tick_secs),
        config.seed,
    );
    simulator.set_patients(patients);

    let (_roster_sub, roster_rx) = simulator.subscribe().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to subscribe to roster updates");
        std::process::exit(1);
    });
    let (_alert_sub, alert_rx) = simulator.subscribe_alerts().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to subscribe to alert updates");
        std::process::exit(1);
    });

    tokio::spawn(watch::watch_roster(roster_rx));
    tokio::spawn(watch::watch_alerts(alert_rx));

    simulator.start();

    shutdown_signal().await;

    tracing::info!("Shutdown signal received");
    simulator.stop();
    tracing::info!("wardlight-monitor stopped");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
