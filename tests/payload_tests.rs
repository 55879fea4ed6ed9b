//! Payload construction through the public API

use toast::infrastructure::notification::{notification_options, plan_dispatch, Permission, WebDispatch};
#[cfg(not(target_arch = "wasm32"))]
use toast::infrastructure::notification::{display_notification_script, render_toast_script};
use toast::{Audio, Notification, Platform, ToastConfig, ToastDuration, MAX_ACTIONS};

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn windows_protocol_action_document() {
    let n = Notification::for_platform("hello", Platform::Windows)
        .with_app_id("MyApp")
        .with_protocol_action("Open", "bingmaps:?q=x");
    let script = render_toast_script(&n, "").unwrap();

    assert!(script.contains("APP_ID = 'MyApp'"));
    assert_eq!(script.matches("<action ").count(), 1);
    assert!(script.contains(r#"arguments="bingmaps:?q=x""#));
}

#[test]
fn sixth_action_is_dropped() {
    let n = (0..6).fold(
        Notification::for_platform("hello", Platform::Windows),
        |n, i| n.with_protocol_action(format!("Action {i}"), format!("app:{i}")),
    );
    assert_eq!(n.actions.len(), MAX_ACTIONS);
    assert!(n.actions.iter().all(|a| a.label != "Action 5"));
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn macos_script_reflects_last_setters() {
    let n = Notification::for_platform("draft", Platform::MacOs)
        .with_title("One")
        .with_title("Two")
        .with_message("final")
        .with_audio(Audio::HERO);
    assert_eq!(
        display_notification_script(&n),
        r#"display notification "final" with title "Two" sound name "Hero""#
    );
}

#[test]
fn web_denied_permission_is_a_no_op() {
    assert_eq!(plan_dispatch(true, Permission::Denied), WebDispatch::Skip);
}

#[test]
fn web_options_start_with_body() {
    let n = Notification::for_platform("hello", Platform::Web).with_image("https://example.com/a.png");
    let options = notification_options(&n);
    assert_eq!(options["body"], "hello");
    assert_eq!(options["image"], "https://example.com/a.png");
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn config_from_toml_seeds_windows_toast() {
    let config = ToastConfig::from_toml_str(
        r#"
app_id = "Release Bot"
duration = "long"
audio = "ms-winsoundevent:Notification.Mail"
"#,
    )
    .unwrap();
    let merged = ToastConfig::defaults_for(Platform::Windows).merge(config);
    assert_eq!(merged.duration_or_default(), ToastDuration::Long);

    let n = Notification::for_platform("shipped", Platform::Windows)
        .with_app_id(merged.app_id_or_default())
        .with_audio(merged.audio_or_default())
        .with_duration(merged.duration_or_default());
    let script = render_toast_script(&n, "").unwrap();
    assert!(script.contains("$APP_ID = 'Release Bot'"));
    assert!(script.contains(r#"duration="long""#));
    assert!(script.contains(r#"<audio src="ms-winsoundevent:Notification.Mail" loop="false" />"#));
}
