// Complete HTTP Status Probe
// One GET, one status code, one "is the body non-empty" marker. No retries,
// no recovery: a failure propagates and ends the run.

use colored::Colorize;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;

// =============================================================================
// Milestone 1: Error taxonomy
// =============================================================================

/// The only two failure kinds in scope: the request/response I/O failing, or
/// the wait being cut short.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Network error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Probe timed out after {0}ms")]
    DeadlineExpired(u64),
}

// =============================================================================
// Milestone 2: The probe
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusProbe {
    pub status: u16,
    pub has_body: bool,
}

/// Sends a single GET and reports what came back. Non-2xx statuses are data,
/// not errors: the status code is surfaced verbatim.
pub async fn probe_status(client: &Client, url: &str) -> Result<StatusProbe, ProbeError> {
    let response = client.get(url).send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;

    Ok(StatusProbe {
        status,
        has_body: !body.is_empty(),
    })
}

// =============================================================================
// Milestone 3: Bounded wait
// =============================================================================

pub async fn probe_with_deadline(
    client: &Client,
    url: &str,
    deadline_ms: u64,
) -> Result<StatusProbe, ProbeError> {
    match timeout(Duration::from_millis(deadline_ms), probe_status(client, url)).await {
        Ok(result) => result,
        Err(_) => Err(ProbeError::DeadlineExpired(deadline_ms)),
    }
}

// =============================================================================
// Main Function - Probes a well-known endpoint
// =============================================================================

#[tokio::main]
async fn main() -> Result<(), ProbeError> {
    println!("{}", "=== HTTP Status Probe ===".bold());

    let client = Client::new();
    let probe = probe_with_deadline(&client, "https://www.google.com", 10_000).await?;

    println!("{}", probe.status);
    if probe.has_body {
        println!("OK");
    }

    println!("{}", "=== Done ===".green());
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
