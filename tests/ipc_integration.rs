//! IPC integration tests — validates codec→dispatch→bridge→center round-trip
//! against the in-memory fake of the native subsystem.

use herald::ipc::codec::{write_frame, MSG_ERROR, MSG_REQUEST, MSG_RESPONSE};
use herald::ipc::IpcServer;
use herald::testing::MemoryCenter;
use herald::{IpcConfig, NotificationBridge};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

/// Helper: spin up an IpcServer on a random port over the given center.
async fn start_test_server(
    center: Arc<MemoryCenter>,
) -> (std::net::SocketAddr, tokio::task::JoinHandle<()>) {
    // Bind temporarily to get a free port, then drop immediately
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let handle = tokio::spawn(async move {
        let bridge = NotificationBridge::new(center);
        let server = IpcServer::new(bridge, addr, IpcConfig::default());
        let _ = server.serve().await;
    });

    // Give the server a moment to bind
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    (addr, handle)
}

async fn start_granting_server() -> (std::net::SocketAddr, tokio::task::JoinHandle<()>) {
    start_test_server(Arc::new(MemoryCenter::granting())).await
}

/// Helper: send a request frame, receive and decode the response.
async fn round_trip(
    stream: &mut TcpStream,
    method: &str,
    body: serde_json::Value,
) -> (u8, serde_json::Value) {
    let request = serde_json::json!({
        "id": "test-1",
        "service": "notifications",
        "method": method,
        "body": body,
    });

    let payload = rmp_serde::to_vec_named(&request).unwrap();
    write_frame(stream, MSG_REQUEST, &payload).await.unwrap();

    // Read response frame
    let mut len_buf = [0u8; 4];
    stream.read_exact(&mut len_buf).await.unwrap();
    let frame_len = u32::from_be_bytes(len_buf) as usize;
    let mut frame_data = vec![0u8; frame_len];
    stream.read_exact(&mut frame_data).await.unwrap();

    let msg_type = frame_data[0];
    let response: serde_json::Value = rmp_serde::from_slice(&frame_data[1..]).unwrap();
    (msg_type, response)
}

fn error_of(response: &serde_json::Value) -> (&str, &str) {
    let error = response.get("error").unwrap();
    (
        error.get("code").unwrap().as_str().unwrap(),
        error.get("message").unwrap().as_str().unwrap(),
    )
}

#[tokio::test]
async fn settings_snapshot_starts_not_determined() {
    let (addr, _handle) = start_granting_server().await;
    let mut stream = TcpStream::connect(addr).await.unwrap();

    let (msg_type, response) =
        round_trip(&mut stream, "GetNotificationSettings", serde_json::json!({})).await;

    assert_eq!(msg_type, MSG_RESPONSE);
    assert_eq!(response["ok"], true);
    assert_eq!(response["body"]["authorizationStatus"], "notDetermined");
    assert_eq!(response["body"]["soundSetting"], "notSupported");
}

#[tokio::test]
async fn authorization_grants_and_settings_reflect_it() {
    let (addr, _handle) = start_granting_server().await;
    let mut stream = TcpStream::connect(addr).await.unwrap();

    let (msg_type, response) = round_trip(
        &mut stream,
        "RequestAuthorization",
        serde_json::json!({"options": ["badge", "sound"]}),
    )
    .await;
    assert_eq!(msg_type, MSG_RESPONSE);
    assert_eq!(response["body"], true);

    let (_, response) =
        round_trip(&mut stream, "GetNotificationSettings", serde_json::json!({})).await;
    assert_eq!(response["body"]["authorizationStatus"], "authorized");
    assert_eq!(response["body"]["badgeSetting"], "enabled");
    assert_eq!(response["body"]["soundSetting"], "enabled");
    assert_eq!(response["body"]["alertSetting"], "disabled");
}

#[tokio::test]
async fn denied_authorization_reports_false() {
    let (addr, _handle) = start_test_server(Arc::new(MemoryCenter::denying())).await;
    let mut stream = TcpStream::connect(addr).await.unwrap();

    let (msg_type, response) = round_trip(
        &mut stream,
        "RequestAuthorization",
        serde_json::json!({"options": ["alert"]}),
    )
    .await;
    assert_eq!(msg_type, MSG_RESPONSE);
    assert_eq!(response["body"], false);
}

#[tokio::test]
async fn invalid_option_fails_naming_the_entry() {
    let (addr, _handle) = start_granting_server().await;
    let mut stream = TcpStream::connect(addr).await.unwrap();

    let (msg_type, response) = round_trip(
        &mut stream,
        "RequestAuthorization",
        serde_json::json!({"options": ["badge", "bogus"]}),
    )
    .await;

    assert_eq!(msg_type, MSG_ERROR);
    assert_eq!(response["ok"], false);
    let (code, message) = error_of(&response);
    assert_eq!(code, "InvalidArguments");
    assert!(message.contains("bogus"), "message was: {message}");
}

#[tokio::test]
async fn schedule_then_list_round_trips_content() {
    let (addr, _handle) = start_granting_server().await;
    let mut stream = TcpStream::connect(addr).await.unwrap();

    let (msg_type, response) = round_trip(
        &mut stream,
        "ScheduleNotification",
        serde_json::json!({
            "id": "n1",
            "targetEpochSeconds": "1700000000",
            "content": {"title": "Stand-up"},
            "repeats": true,
            "timeSensitive": true,
        }),
    )
    .await;
    assert_eq!(msg_type, MSG_RESPONSE);
    assert_eq!(response["ok"], true);

    let (msg_type, response) = round_trip(
        &mut stream,
        "GetScheduledNotifications",
        serde_json::json!({}),
    )
    .await;
    assert_eq!(msg_type, MSG_RESPONSE);
    let records = response["body"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record["id"], "n1");
    assert_eq!(record["title"], "Stand-up");
    // Missing content fields come back as empty strings
    assert_eq!(record["subtitle"], "");
    assert_eq!(record["body"], "");
    assert_eq!(record["targetEpochSeconds"], "1700000000");
    assert_eq!(record["repeats"], true);
    assert_eq!(record["timeSensitive"], true);
}

#[tokio::test]
async fn rescheduling_an_id_replaces_the_pending_request() {
    let (addr, _handle) = start_granting_server().await;
    let mut stream = TcpStream::connect(addr).await.unwrap();

    for title in ["first", "second"] {
        let (msg_type, _) = round_trip(
            &mut stream,
            "ScheduleNotification",
            serde_json::json!({
                "id": "dup",
                "targetEpochSeconds": "1700000000",
                "content": {"title": title},
            }),
        )
        .await;
        assert_eq!(msg_type, MSG_RESPONSE);
    }

    let (_, response) = round_trip(
        &mut stream,
        "GetScheduledNotifications",
        serde_json::json!({}),
    )
    .await;
    let records = response["body"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["title"], "second");
}

#[tokio::test]
async fn bad_timestamp_fails_and_schedules_nothing() {
    let (addr, _handle) = start_granting_server().await;
    let mut stream = TcpStream::connect(addr).await.unwrap();

    let (msg_type, response) = round_trip(
        &mut stream,
        "ScheduleNotification",
        serde_json::json!({
            "id": "n1",
            "targetEpochSeconds": "not-a-number",
        }),
    )
    .await;
    assert_eq!(msg_type, MSG_ERROR);
    let (code, message) = error_of(&response);
    assert_eq!(code, "InvalidArguments");
    assert!(message.contains("targetEpochSeconds"));

    let (_, response) = round_trip(
        &mut stream,
        "GetScheduledNotifications",
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response["body"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn cancelling_unknown_ids_is_silent() {
    let (addr, _handle) = start_granting_server().await;
    let mut stream = TcpStream::connect(addr).await.unwrap();

    let (msg_type, _) = round_trip(
        &mut stream,
        "ScheduleNotification",
        serde_json::json!({"id": "keep", "targetEpochSeconds": "1700000000"}),
    )
    .await;
    assert_eq!(msg_type, MSG_RESPONSE);

    let (msg_type, response) = round_trip(
        &mut stream,
        "CancelNotifications",
        serde_json::json!({"ids": ["ghost"]}),
    )
    .await;
    assert_eq!(msg_type, MSG_RESPONSE);
    assert_eq!(response["ok"], true);

    let (_, response) = round_trip(
        &mut stream,
        "GetScheduledNotifications",
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response["body"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn cancel_removes_matching_ids() {
    let (addr, _handle) = start_granting_server().await;
    let mut stream = TcpStream::connect(addr).await.unwrap();

    for id in ["a", "b", "c"] {
        round_trip(
            &mut stream,
            "ScheduleNotification",
            serde_json::json!({"id": id, "targetEpochSeconds": "1700000000"}),
        )
        .await;
    }

    round_trip(
        &mut stream,
        "CancelNotifications",
        serde_json::json!({"ids": ["a", "c"]}),
    )
    .await;

    let (_, response) = round_trip(
        &mut stream,
        "GetScheduledNotifications",
        serde_json::json!({}),
    )
    .await;
    let records = response["body"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], "b");
}

#[tokio::test]
async fn native_rejection_surfaces_the_description() {
    let center = Arc::new(MemoryCenter::granting());
    center.fail_next_add("storage full");
    let (addr, _handle) = start_test_server(center).await;
    let mut stream = TcpStream::connect(addr).await.unwrap();

    let (msg_type, response) = round_trip(
        &mut stream,
        "ScheduleNotification",
        serde_json::json!({"id": "n1", "targetEpochSeconds": "1700000000"}),
    )
    .await;

    assert_eq!(msg_type, MSG_ERROR);
    let (code, message) = error_of(&response);
    assert_eq!(code, "UNNotificationError");
    assert_eq!(message, "storage full");
}

#[tokio::test]
async fn unknown_service_and_method_return_not_found() {
    let (addr, _handle) = start_granting_server().await;
    let mut stream = TcpStream::connect(addr).await.unwrap();

    let request = serde_json::json!({
        "id": "test-1",
        "service": "nonexistent",
        "method": "Foo",
        "body": {},
    });
    let payload = rmp_serde::to_vec_named(&request).unwrap();
    write_frame(&mut stream, MSG_REQUEST, &payload)
        .await
        .unwrap();
    let mut len_buf = [0u8; 4];
    stream.read_exact(&mut len_buf).await.unwrap();
    let mut frame_data = vec![0u8; u32::from_be_bytes(len_buf) as usize];
    stream.read_exact(&mut frame_data).await.unwrap();
    let response: serde_json::Value = rmp_serde::from_slice(&frame_data[1..]).unwrap();
    assert_eq!(frame_data[0], MSG_ERROR);
    assert_eq!(error_of(&response).0, "NotFound");

    let (msg_type, response) =
        round_trip(&mut stream, "NoSuchMethod", serde_json::json!({})).await;
    assert_eq!(msg_type, MSG_ERROR);
    assert_eq!(error_of(&response).0, "NotFound");
}
