// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn fake_alert_records_alerts() {
    let adapter = FakeAlertAdapter::new();

    let alert = Alert {
        title: "Error: 'first'".to_string(),
        detail: "first".to_string(),
    };
    adapter.alert(&alert).await.unwrap();
    adapter
        .alert(&Alert {
            title: "Error: 'second'".to_string(),
            detail: "second".to_string(),
        })
        .await
        .unwrap();

    let alerts = adapter.alerts();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0], alert);
}
