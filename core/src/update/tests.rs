use super::*;
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq, Eq)]
enum SinkCall {
    Channel(NotificationChannel),
    Notify(u32, Notification),
    Alert(String),
}

#[derive(Default)]
struct RecordingSink(RefCell<Vec<SinkCall>>);

impl NotificationSink for RecordingSink {
    fn create_channel(&self, channel: &NotificationChannel) {
        self.0.borrow_mut().push(SinkCall::Channel(channel.clone()));
    }

    fn notify(&self, id: u32, notification: &Notification) {
        self.0
            .borrow_mut()
            .push(SinkCall::Notify(id, notification.clone()));
    }

    fn alert(&self, message: &str) {
        self.0.borrow_mut().push(SinkCall::Alert(message.to_string()));
    }
}

struct StubVerifier(Result<(), VerifyError>);

impl PackageVerifier for StubVerifier {
    fn verify(&self, _package: &Path) -> Result<(), VerifyError> {
        self.0.clone()
    }
}

fn expected_notification(config: &UpdateConfig, package: &Path) -> Notification {
    Notification {
        channel_id: config.channel_id.clone(),
        title: config.title.clone(),
        text: config.text.clone(),
        action: InstallAction {
            label: config.action_label.clone(),
            package: package.to_path_buf(),
        },
    }
}

#[test]
fn test_verified_package_posts_notification() {
    let config = UpdateConfig::default();
    let notifier = UpdateNotifier::new(config.clone());
    let sink = RecordingSink::default();
    let package = Path::new("/sdcard/update.zip");

    let outcome = notifier.on_package_received(package, &StubVerifier(Ok(())), &sink);

    assert!(outcome.verified);
    assert_eq!(
        sink.0.into_inner(),
        vec![
            SinkCall::Channel(NotificationChannel::from(&config)),
            SinkCall::Notify(0x201920, expected_notification(&config, package)),
        ]
    );
}

#[test]
fn test_corrupted_package_alerts_and_still_notifies() {
    let config = UpdateConfig::default();
    let notifier = UpdateNotifier::new(config.clone());
    let sink = RecordingSink::default();
    let package = Path::new("/sdcard/broken.zip");
    let verifier = StubVerifier(Err(VerifyError("signature mismatch".to_string())));

    let outcome = notifier.on_package_received(package, &verifier, &sink);

    assert!(!outcome.verified);
    let calls = sink.0.into_inner();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0], SinkCall::Alert(config.corrupted_message.clone()));
    assert!(matches!(calls[1], SinkCall::Channel(_)));
    assert_eq!(
        calls[2],
        SinkCall::Notify(config.notification_id, expected_notification(&config, package))
    );
}

#[test]
fn test_channel_uses_config() {
    let config = UpdateConfig {
        channel_id: "ota".to_string(),
        channel_description: "OTA updates".to_string(),
        notification_id: 7,
        ..UpdateConfig::default()
    };
    let notifier = UpdateNotifier::new(config);
    let sink = RecordingSink::default();

    notifier.on_package_received(Path::new("/data/ota.zip"), &StubVerifier(Ok(())), &sink);

    let calls = sink.0.into_inner();
    assert_eq!(
        calls[0],
        SinkCall::Channel(NotificationChannel {
            id: "ota".to_string(),
            name: "ota".to_string(),
            description: "OTA updates".to_string(),
            importance: Importance::High,
        })
    );
    assert!(matches!(&calls[1], SinkCall::Notify(7, n) if n.channel_id == "ota"));
}
