use std::time::Duration;

use serde_json::json;

use super::*;

#[tokio::test]
async fn complete_delivers_to_waiter() {
    let requests = PendingRequests::default();
    let pending = requests.register(Id::Number(1));
    assert_eq!(requests.len(), 1);

    assert!(requests.complete(Response::from_ok(Id::Number(1), json!("done"))));
    let response = pending.wait().await.unwrap();
    let (id, result) = response.into_parts();
    assert_eq!(id, Id::Number(1));
    assert_eq!(result.unwrap(), json!("done"));
    assert_eq!(requests.len(), 0);
}

#[tokio::test]
async fn complete_without_waiter_is_rejected() {
    let requests = PendingRequests::default();
    assert!(!requests.complete(Response::from_ok(Id::Number(9), json!(null))));
}

#[tokio::test]
async fn dropping_waiter_unregisters_id() {
    let requests = PendingRequests::default();
    let pending = requests.register(Id::Number(1));
    drop(pending);
    assert_eq!(requests.len(), 0);
    assert!(!requests.complete(Response::from_ok(Id::Number(1), json!(null))));
}

#[tokio::test]
async fn timed_out_waiter_unregisters_id() {
    let requests = PendingRequests::default();
    let pending = requests.register(Id::Number(1));
    assert!(tokio::time::timeout(Duration::from_millis(10), pending.wait()).await.is_err());
    assert_eq!(requests.len(), 0);
}

#[tokio::test]
async fn responses_route_by_id() {
    let requests = PendingRequests::default();
    let first = requests.register(Id::Number(1));
    let second = requests.register(Id::String("two".to_string()));

    assert!(requests.complete(Response::from_ok(Id::String("two".to_string()), json!(2))));
    assert!(requests.complete(Response::from_ok(Id::Number(1), json!(1))));

    assert_eq!(second.wait().await.unwrap().into_parts().1.unwrap(), json!(2));
    assert_eq!(first.wait().await.unwrap().into_parts().1.unwrap(), json!(1));
}

#[tokio::test]
async fn close_fails_current_and_future_waiters() {
    let requests = PendingRequests::default();
    let current = requests.register(Id::Number(1));
    requests.close();
    assert!(matches!(current.wait().await, Err(ChannelError::Closed)));

    let future = requests.register(Id::Number(2));
    assert_eq!(requests.len(), 0);
    assert!(matches!(future.wait().await, Err(ChannelError::Closed)));
}
