use super::*;
use crate::error::Error;

// ============================================================================
// Tests: SceneFormat
// ============================================================================

#[test]
fn test_format_from_known_suffixes() {
    assert_eq!(SceneFormat::from_locator("flood.ksplat"), Some(SceneFormat::KSplat));
    assert_eq!(SceneFormat::from_locator("street.splat"), Some(SceneFormat::Splat));
    assert_eq!(SceneFormat::from_locator("scan.ply"), Some(SceneFormat::Ply));
}

#[test]
fn test_format_is_case_insensitive() {
    assert_eq!(SceneFormat::from_locator("FLOOD.KSPLAT"), Some(SceneFormat::KSplat));
    assert_eq!(SceneFormat::from_locator("Scan.Ply"), Some(SceneFormat::Ply));
}

#[test]
fn test_ksplat_not_mistaken_for_splat() {
    assert_eq!(
        SceneFormat::from_locator("https://cdn.example.com/a/b.ksplat"),
        Some(SceneFormat::KSplat)
    );
}

#[test]
fn test_unknown_suffix_has_no_hint() {
    assert_eq!(SceneFormat::from_locator("model.glb"), None);
    assert_eq!(SceneFormat::from_locator(""), None);
    assert_eq!(SceneFormat::from_locator("blob:http://localhost/5d1c"), None);
}

#[test]
fn test_format_display_is_extension() {
    assert_eq!(format!("{}", SceneFormat::Ply), ".ply");
    assert_eq!(SceneFormat::KSplat.extension(), ".ksplat");
}

// ============================================================================
// Tests: AssetLocator
// ============================================================================

#[test]
fn test_remote_display_name_is_last_segment() {
    let locator = AssetLocator::remote("https://example.com/scenes/flood.ksplat");
    assert_eq!(locator.display_name(), "flood.ksplat");
    assert_eq!(locator.url(), "https://example.com/scenes/flood.ksplat");
}

#[test]
fn test_remote_display_name_falls_back_to_scene() {
    let locator = AssetLocator::remote("https://example.com/scenes/");
    assert_eq!(locator.display_name(), "scene");
    assert_eq!(AssetLocator::remote("").display_name(), "scene");
}

#[test]
fn test_local_file_uses_file_name() {
    let locator = AssetLocator::local_file("blob:http://localhost:3000/8a7e", "river.PLY");
    assert_eq!(locator.display_name(), "river.PLY");
    assert_eq!(locator.url(), "blob:http://localhost:3000/8a7e");
    assert_eq!(locator.inferred_format(), Some(SceneFormat::Ply));
}

#[test]
fn test_remote_inferred_format() {
    assert_eq!(
        AssetLocator::remote("https://x/y.splat").inferred_format(),
        Some(SceneFormat::Splat)
    );
    assert_eq!(AssetLocator::remote("https://x/y.bin").inferred_format(), None);
}

// ============================================================================
// Tests: Tickets and completions
// ============================================================================

#[test]
fn test_ticket_epoch() {
    let ticket = LoadTicket::new(7);
    assert_eq!(ticket.epoch(), 7);
    assert!(LoadTicket::new(3) < LoadTicket::new(4));
}

#[test]
fn test_completion_sender_delivers_with_ticket() {
    let (tx, rx) = completion_channel();
    let sender = CompletionSender::new(LoadTicket::new(2), tx);
    assert_eq!(sender.ticket(), LoadTicket::new(2));

    assert!(sender.complete(Err(Error::TransportError("404".to_string()))));

    let completion = rx.try_recv().unwrap();
    assert_eq!(completion.ticket, LoadTicket::new(2));
    assert!(matches!(completion.result, Err(Error::TransportError(_))));
}

#[test]
fn test_completion_sender_from_worker_thread() {
    let (tx, rx) = completion_channel();
    let sender = CompletionSender::new(LoadTicket::new(5), tx);

    std::thread::spawn(move || {
        sender.complete(Ok(()));
    })
    .join()
    .unwrap();

    let completion = rx.recv().unwrap();
    assert_eq!(completion.ticket.epoch(), 5);
    assert!(completion.result.is_ok());
}

#[test]
fn test_completion_sender_reports_dropped_viewer() {
    let (tx, rx) = completion_channel();
    drop(rx);
    let sender = CompletionSender::new(LoadTicket::new(1), tx);
    assert!(!sender.complete(Ok(())));
}
