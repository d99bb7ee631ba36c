/*!
 * Handler Integration Tests
 */

use crate::support::Player;
use node_perms::permissions::{PrincipalKind, ResolutionPath};
use node_perms::{
    CapabilityFlag, ConfigError, HandlerConfig, OnlinePermissionHandler, PermissionError,
    PermissionHandler, Principal, PrincipalRegistry,
};
use pretty_assertions::assert_eq;
use std::io::Write;
use std::sync::Arc;
use std::thread;
use uuid::Uuid;

#[test]
fn test_session_lifecycle() {
    let handler = OnlinePermissionHandler::<Player>::default();
    handler.initialize();
    let registry = PrincipalRegistry::new();
    let id = Uuid::new_v4();

    registry.connect(id, Arc::new(Player::new("alice").with("plots.*", true)));
    let profile = handler
        .permission_profile(&registry.principal(id))
        .expect("connected principal has a profile");
    assert!(profile.has_permission(None, "plots.claim"));

    registry.disconnect(id);
    // The profile outlives the session but can no longer grant anything
    assert!(!profile.has_permission(None, "plots.claim"));

    let offline = registry.principal(id);
    assert_eq!(offline.kind(), PrincipalKind::Offline);
    assert!(handler.permission_profile(&offline).is_none());
}

#[test]
fn test_offline_is_unsupported_not_denied() {
    let handler = OnlinePermissionHandler::<Player>::default();

    assert!(handler
        .permission_profile(&Principal::Offline(Uuid::new_v4()))
        .is_none());
    assert!(!handler.capabilities().supports_offline());
    assert!(handler.has_capability(CapabilityFlag::OnlinePermissions));
}

#[test]
fn test_console_profile_never_queries() {
    let handler = OnlinePermissionHandler::<Player>::default();
    let profile = handler.permission_profile(&Principal::Console).unwrap();

    assert!(profile.is_console());
    assert_eq!(profile.principal_id(), None);
    assert!(profile.has_permission(Some("world"), "plots.admin.destroy.other"));
}

#[test]
fn test_profiles_are_independent_per_query() {
    let handler = OnlinePermissionHandler::<Player>::default();
    let player = Arc::new(Player::new("bob"));
    let principal = Principal::connected(Uuid::new_v4(), &player);

    let first = handler.permission_profile(&principal).unwrap();
    assert!(!first.has_permission(None, "plots.home"));

    player.set("plots.home", true);
    let second = handler.permission_profile(&principal).unwrap();
    assert!(first.has_permission(None, "plots.home"));
    assert!(second.has_permission(None, "plots.home"));
}

#[test]
fn test_concurrent_checks() {
    let handler = OnlinePermissionHandler::<Player>::default();
    let player = Arc::new(Player::new("carol").with("plots.admin.*", true).with("plots.*", false));
    let profile = handler
        .permission_profile(&Principal::connected(Uuid::new_v4(), &player))
        .unwrap();

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert!(!profile.has_permission(None, "plots.admin.kick"));
                    assert!(!profile.has_permission(None, "plots.claim"));
                }
            });
        }
    });
}

#[test]
fn test_audit_enabled_from_config() {
    let config = HandlerConfig::from_json_str(r#"{ "audit": { "enabled": true } }"#).unwrap();
    let handler = OnlinePermissionHandler::<Player>::new(&config).unwrap();
    let registry = PrincipalRegistry::new();
    let id = Uuid::new_v4();
    registry.connect(id, Arc::new(Player::new("dave").with("plots.claim", true)));

    let profile = handler.permission_profile(&registry.principal(id)).unwrap();
    profile.has_permission(None, "plots.claim");
    profile.has_permission(None, "plots.delete");
    registry.disconnect(id);
    profile.has_permission(None, "plots.claim");

    let audit = handler.audit().expect("audit enabled");
    let events = audit.for_principal(id, 10);
    assert_eq!(
        events.iter().map(|e| e.path).collect::<Vec<_>>(),
        vec![ResolutionPath::Expired, ResolutionPath::Chain, ResolutionPath::FastPath]
    );
    assert_eq!(audit.denial_count(id), 2);
    assert_eq!(audit.stats().total_events, 3);
}

#[test]
fn test_handler_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "precedence": "most_specific" }}"#).unwrap();

    let handler = OnlinePermissionHandler::<Player>::from_config_path(file.path()).unwrap();
    let player = Arc::new(Player::new("erin").with("a.b.*", true).with("a.*", false));
    let profile = handler
        .permission_profile(&Principal::connected(Uuid::new_v4(), &player))
        .unwrap();

    assert!(profile.has_permission(None, "a.b.c"));
}

#[test]
fn test_handler_rejects_invalid_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "capabilities": ["OFFLINE_PERMISSIONS"] }}"#).unwrap();

    let err = OnlinePermissionHandler::<Player>::from_config_path(file.path())
        .err()
        .expect("offline capability is rejected");
    assert!(matches!(
        err,
        PermissionError::Config(ConfigError::Invalid { .. })
    ));
}
