use super::*;
use chrono::{Local, TimeZone};
use std::time::Duration;

fn record(status: RequestStatus) -> ResultRecord {
    ResultRecord::new(
        "http://localhost/health",
        status,
        Local::now(),
        Duration::from_millis(12),
    )
}

#[test]
fn error_status_renders_with_prefix() -> Result<(), String> {
    let status = RequestStatus::Error("connection refused".to_owned());
    if status.to_string() != "Error: connection refused" {
        return Err(format!("Unexpected status: {}", status));
    }
    if !status.is_error() {
        return Err("Expected error status".to_owned());
    }

    let ok = RequestStatus::Response("200 OK".to_owned());
    if ok.to_string() != "200 OK" || ok.is_error() {
        return Err(format!("Unexpected response status: {}", ok));
    }
    Ok(())
}

#[test]
fn timestamp_uses_second_precision_local_layout() -> Result<(), String> {
    let at = Local
        .with_ymd_and_hms(2024, 3, 9, 7, 5, 1)
        .single()
        .ok_or_else(|| "ambiguous local time".to_owned())?;
    let formatted = format_timestamp(at);
    if formatted != "2024-03-09 07:05:01" {
        return Err(format!("Unexpected timestamp: {}", formatted));
    }
    Ok(())
}

#[test]
fn record_keeps_url_unmodified() -> Result<(), String> {
    let entry = ResultRecord::new(
        "HTTP://Example.com/a b?x=1",
        RequestStatus::Response("200 OK".to_owned()),
        Local::now(),
        Duration::from_millis(1500),
    );
    if entry.url != "HTTP://Example.com/a b?x=1" {
        return Err(format!("Unexpected url: {}", entry.url));
    }
    if entry.response_time_secs().to_string() != "1.5" {
        return Err(format!(
            "Unexpected response time: {}",
            entry.response_time_secs()
        ));
    }
    Ok(())
}

#[test]
fn collector_keeps_every_concurrent_append() -> Result<(), String> {
    const PRODUCERS: usize = 8;
    const PER_PRODUCER: usize = 250;

    let collector = ResultCollector::new();
    std::thread::scope(|scope| {
        for _ in 0..PRODUCERS {
            let collector = collector.clone();
            scope.spawn(move || {
                for _ in 0..PER_PRODUCER {
                    collector.append(record(RequestStatus::Response("200 OK".to_owned())));
                }
            });
        }
    });

    let expected = PRODUCERS.saturating_mul(PER_PRODUCER);
    if collector.len() != expected {
        return Err(format!("Expected {} records, got {}", expected, collector.len()));
    }
    let drained = collector.drain();
    if drained.len() != expected {
        return Err(format!("Expected {} drained, got {}", expected, drained.len()));
    }
    if !collector.is_empty() {
        return Err("Expected collector to be empty after drain".to_owned());
    }
    Ok(())
}

#[test]
fn summary_counts_responses_and_errors() -> Result<(), String> {
    let records = vec![
        record(RequestStatus::Response("200 OK".to_owned())),
        record(RequestStatus::Response("503 Service Unavailable".to_owned())),
        record(RequestStatus::Error("dns error".to_owned())),
    ];
    let summary = RunSummary::from_records(&records, Duration::from_secs(2));
    let expected = RunSummary {
        total_requests: 3,
        responses: 2,
        errors: 1,
        elapsed: Duration::from_secs(2),
    };
    if summary != expected {
        return Err(format!("Unexpected summary: {:?}", summary));
    }
    Ok(())
}
