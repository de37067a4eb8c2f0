// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! End-to-end tests of the client against real and test-driven hosts.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;

use super::{ExecutionMode, ExportClient, ExportOptions};
use crate::config::consts::{
    CSV_MIME_TYPE, DEFAULT_TIMEOUT, EXCEL_MIME_TYPE, MAX_TIMEOUT, TEXT_MIME_TYPE,
};
use crate::config::parse_config;
use crate::encoders::Encoders;
use crate::errors::ExportError;
use crate::host::stub::{FailingLauncher, ManualLauncher};
use crate::host::{DisabledHostLauncher, ThreadHostLauncher};
use crate::table::{ColumnDescriptor, ExportFormat, Row};

fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("Name", "Name"),
        ColumnDescriptor::new("Amount", "Amount"),
    ]
}

fn rows(name: &str) -> Vec<Row> {
    vec![Row::new().with("Name", name).with("Amount", 5)]
}

fn csv_options(name: &str) -> ExportOptions {
    ExportOptions::new(ExportFormat::Csv, rows(name), columns())
}

#[tokio::test]
async fn test_thread_host_csv_export() {
    let client = ExportClient::new(Encoders::new(), &ThreadHostLauncher::default(), DEFAULT_TIMEOUT);
    assert_eq!(client.mode(), ExecutionMode::Background);

    let blob = client.run_export(csv_options("A,B")).await.unwrap();

    assert_eq!(blob.mime_type(), CSV_MIME_TYPE);
    assert_eq!(blob.as_text(), Some("Name,Amount\n\"A,B\",5"));
    client.shutdown().await;
}

#[tokio::test]
async fn test_thread_host_pdf_without_renderer_yields_text_document() {
    let client = ExportClient::new(Encoders::new(), &ThreadHostLauncher::default(), DEFAULT_TIMEOUT);

    let blob = client
        .run_export(ExportOptions::new(ExportFormat::Pdf, rows("Arts"), columns()))
        .await
        .unwrap();

    assert_eq!(blob.mime_type(), TEXT_MIME_TYPE);
    assert_eq!(blob.as_text(), Some("Name\tAmount\nArts\t5"));
}

#[tokio::test]
async fn test_responses_answered_in_reverse_order_reach_their_callers() {
    let launcher = ManualLauncher::new();
    let client = ExportClient::new(Encoders::new(), &launcher, DEFAULT_TIMEOUT);

    let first = client.start_export(csv_options("first"));
    let second = client.start_export(csv_options("second"));
    assert_ne!(first.id(), second.id());

    let mut host = launcher.take_host();
    let first_request = host.next_request().await;
    let second_request = host.next_request().await;
    assert_eq!(&first_request.id, first.id());

    host.answer(&second_request);
    host.answer(&first_request);

    let second_blob = second.wait().await.unwrap();
    let first_blob = first.wait().await.unwrap();
    assert_eq!(second_blob.as_text(), Some("Name,Amount\nsecond,5"));
    assert_eq!(first_blob.as_text(), Some("Name,Amount\nfirst,5"));
}

#[tokio::test(start_paused = true)]
async fn test_faster_export_resolves_first() {
    let launcher = ManualLauncher::new();
    let client = ExportClient::new(Encoders::new(), &launcher, DEFAULT_TIMEOUT);
    let completed = Arc::new(Mutex::new(Vec::new()));

    let record = |label: &'static str| {
        let completed = Arc::clone(&completed);
        move |_: &crate::table::Blob, _: ExportFormat| completed.lock().unwrap().push(label)
    };

    let slow = client.start_export(csv_options("slow").on_success(record("slow")));
    let fast = client.start_export(csv_options("fast").on_success(record("fast")));

    let mut host = launcher.take_host();
    for (latency, request) in [
        (Duration::from_millis(200), host.next_request().await),
        (Duration::from_millis(10), host.next_request().await),
    ] {
        let handler = host.host.clone();
        let responses = host.responses.clone();
        tokio::spawn(async move {
            tokio::time::sleep(latency).await;
            let _ = responses.send(handler.handle(&request));
        });
    }

    let (slow_result, fast_result) = tokio::join!(slow.wait(), fast.wait());

    assert_eq!(slow_result.unwrap().as_text(), Some("Name,Amount\nslow,5"));
    assert_eq!(fast_result.unwrap().as_text(), Some("Name,Amount\nfast,5"));
    assert_eq!(*completed.lock().unwrap(), vec!["fast", "slow"]);
}

#[tokio::test(start_paused = true)]
async fn test_unanswered_export_times_out_and_late_response_is_ignored() {
    let launcher = ManualLauncher::new();
    let client = ExportClient::new(Encoders::new(), &launcher, DEFAULT_TIMEOUT);
    let errors = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&errors);
    let handle = client.start_export(
        csv_options("never")
            .on_success(|_, _| panic!("a timed out export must not succeed"))
            .on_error(move |message| sink.lock().unwrap().push(message.to_string())),
    );

    let mut host = launcher.take_host();
    let request = host.next_request().await;

    let result = handle.wait().await;
    assert_eq!(result, Err(ExportError::Timeout(Duration::from_secs(300))));
    assert_eq!(
        *errors.lock().unwrap(),
        vec!["processing timeout after 300s".to_string()]
    );

    // Queued ahead of the in-flight query, so it is handled first.
    host.answer(&request);
    assert_eq!(client.in_flight().await, 0);
    assert_eq!(errors.lock().unwrap().len(), 1);
    assert_eq!(client.mode(), ExecutionMode::Background);
}

#[tokio::test]
async fn test_host_crash_fails_in_flight_requests_and_switches_to_local() {
    let launcher = ManualLauncher::new();
    let client = ExportClient::new(Encoders::new(), &launcher, DEFAULT_TIMEOUT);

    let pending = client.start_export(csv_options("lost"));
    let mut host = launcher.take_host();
    host.next_request().await;
    drop(host);

    let result = pending.wait().await;
    assert!(matches!(result, Err(ExportError::HostUnavailable(_))));
    assert_eq!(client.mode(), ExecutionMode::Local);

    let local = client.start_export(csv_options("A,B"));
    assert_eq!(local.mode(), ExecutionMode::Local);
    assert_eq!(
        local.wait().await.unwrap().as_text(),
        Some("Name,Amount\n\"A,B\",5")
    );

    let pdf = client
        .run_export(ExportOptions::new(ExportFormat::Pdf, rows("x"), columns()))
        .await;
    assert_eq!(pdf, Err(ExportError::LocalFormatUnsupported(ExportFormat::Pdf)));
}

#[tokio::test]
async fn test_disabled_launcher_exports_csv_and_excel_locally() {
    let client = ExportClient::new(Encoders::new(), &DisabledHostLauncher, DEFAULT_TIMEOUT);
    assert_eq!(client.mode(), ExecutionMode::Local);

    let csv = client.run_export(csv_options("A,B")).await.unwrap();
    assert_eq!(csv.as_text(), Some("Name,Amount\n\"A,B\",5"));

    let excel = client
        .run_export(ExportOptions::new(ExportFormat::Excel, rows("<b>"), columns()))
        .await
        .unwrap();
    assert_eq!(excel.mime_type(), EXCEL_MIME_TYPE);
    let html = excel.as_text().unwrap();
    assert!(html.contains("<td>&lt;b&gt;</td>"));
    assert!(!html.contains("<td><b></td>"));
    assert_eq!(client.in_flight().await, 0);
}

#[tokio::test]
async fn test_failing_launcher_falls_back_to_local() {
    let client = ExportClient::new(Encoders::new(), &FailingLauncher, DEFAULT_TIMEOUT);
    assert_eq!(client.mode(), ExecutionMode::Local);

    let error = client
        .run_export(ExportOptions::new(ExportFormat::Pdf, rows("x"), columns()))
        .await
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "PDF export is not available without the background host"
    );
}

#[test]
fn test_client_built_outside_runtime_runs_locally() {
    let client = ExportClient::new(Encoders::new(), &ThreadHostLauncher::default(), DEFAULT_TIMEOUT);
    assert_eq!(client.mode(), ExecutionMode::Local);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let blob = runtime.block_on(client.run_export(csv_options("A,B"))).unwrap();
    assert_eq!(blob.as_text(), Some("Name,Amount\n\"A,B\",5"));
}

#[tokio::test]
async fn test_callbacks_report_progress_then_success() {
    let client = ExportClient::new(Encoders::new(), &ThreadHostLauncher::default(), DEFAULT_TIMEOUT);
    let events = Arc::new(Mutex::new(Vec::new()));

    let progress = Arc::clone(&events);
    let success = Arc::clone(&events);
    let options = ExportOptions::new(
        ExportFormat::Csv,
        vec![Row::new().with("Name", "a"), Row::new().with("Name", "b")],
        columns(),
    )
    .on_progress(move |message| progress.lock().unwrap().push(message.to_string()))
    .on_success(move |blob, format| {
        success
            .lock()
            .unwrap()
            .push(format!("{} {}", format.label(), blob.mime_type()))
    })
    .on_error(|message| panic!("unexpected error: {message}"));

    client.run_export(options).await.unwrap();

    assert_eq!(
        *events.lock().unwrap(),
        vec![
            "Processing 2 rows for CSV export".to_string(),
            format!("CSV {}", CSV_MIME_TYPE),
        ]
    );
}

#[tokio::test]
async fn test_encoding_failure_reaches_on_error() {
    let client = ExportClient::new(Encoders::new(), &ThreadHostLauncher::default(), DEFAULT_TIMEOUT);
    let errors = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&errors);
    let options = ExportOptions::new(
        ExportFormat::Csv,
        vec![Row::new().with("Name", json!({ "first": "Ada" }))],
        columns(),
    )
    .on_error(move |message| sink.lock().unwrap().push(message.to_string()));

    let result = client.run_export(options).await;

    let expected = "row 0: column 'Name' holds an unsupported object value".to_string();
    assert_eq!(result, Err(ExportError::Encoding(expected.clone())));
    assert_eq!(*errors.lock().unwrap(), vec![expected]);
    assert_eq!(client.mode(), ExecutionMode::Background);
}

#[tokio::test]
async fn test_cancel_resolves_handle_and_ignores_later_answer() {
    let launcher = ManualLauncher::new();
    let client = ExportClient::new(Encoders::new(), &launcher, DEFAULT_TIMEOUT);

    let handle = client.start_export(csv_options("withdrawn"));
    let id = handle.id().clone();
    let mut host = launcher.take_host();
    let request = host.next_request().await;

    client.cancel(&id);
    assert_eq!(handle.wait().await, Err(ExportError::Cancelled));

    host.answer(&request);
    assert_eq!(client.in_flight().await, 0);
}

#[tokio::test]
async fn test_cancel_right_after_start_is_not_lost() {
    let launcher = ManualLauncher::new();
    let client = ExportClient::new(Encoders::new(), &launcher, DEFAULT_TIMEOUT);
    let mut host = launcher.take_host();

    for _ in 0..50 {
        let handle = client.start_export(csv_options("withdrawn"));
        client.cancel(handle.id());

        let request = host.next_request().await;
        host.answer(&request);

        assert_eq!(handle.wait().await, Err(ExportError::Cancelled));
    }
    assert_eq!(client.in_flight().await, 0);
}

#[tokio::test]
async fn test_in_flight_sees_export_started_just_before() {
    let launcher = ManualLauncher::new();
    let client = ExportClient::new(Encoders::new(), &launcher, DEFAULT_TIMEOUT);

    let _handle = client.start_export(csv_options("pending"));
    assert_eq!(client.in_flight().await, 1);
}

#[tokio::test]
async fn test_oversized_timeout_is_capped_and_host_keeps_working() {
    let client = ExportClient::new(
        Encoders::new(),
        &ThreadHostLauncher::default(),
        Duration::from_secs(100_000_000),
    );
    assert_eq!(client.timeout(), MAX_TIMEOUT);

    let blob = client.run_export(csv_options("A,B")).await.unwrap();
    assert_eq!(blob.as_text(), Some("Name,Amount\n\"A,B\",5"));
    assert_eq!(client.mode(), ExecutionMode::Background);
}

#[tokio::test]
async fn test_in_flight_counts_unanswered_requests() {
    let launcher = ManualLauncher::new();
    let client = ExportClient::new(Encoders::new(), &launcher, DEFAULT_TIMEOUT);

    let first = client.start_export(csv_options("first"));
    let _second = client.start_export(csv_options("second"));
    let mut host = launcher.take_host();
    let first_request = host.next_request().await;
    host.next_request().await;

    assert_eq!(client.in_flight().await, 2);

    host.answer(&first_request);
    first.wait().await.unwrap();
    assert_eq!(client.in_flight().await, 1);
}

#[tokio::test]
async fn test_from_config_with_host_disabled() {
    let config = parse_config(
        r#"
host:
  enabled: false
timeout_seconds: 60
excel:
  sheet_name: Colleges
"#,
    )
    .unwrap();

    let client = ExportClient::from_config(&config);
    assert_eq!(client.mode(), ExecutionMode::Local);
    assert_eq!(client.timeout(), Duration::from_secs(60));

    let excel = client
        .run_export(ExportOptions::new(ExportFormat::Excel, rows("x"), columns()))
        .await
        .unwrap();
    assert!(excel.as_text().unwrap().contains("<x:Name>Colleges</x:Name>"));
}

#[tokio::test]
async fn test_caller_rows_are_not_modified() {
    let client = ExportClient::new(Encoders::new(), &ThreadHostLauncher::default(), DEFAULT_TIMEOUT);
    let data: Arc<[Row]> = vec![
        Row::new().with("Name", "A,B").with("Amount", 5),
        Row::new().with("Name", json!(null)),
    ]
    .into();
    let snapshot = data.to_vec();

    let options = ExportOptions::new(ExportFormat::Excel, Arc::clone(&data), columns());
    client.run_export(options).await.unwrap();

    assert_eq!(data.to_vec(), snapshot);
}
