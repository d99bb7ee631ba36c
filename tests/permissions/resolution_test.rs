/*!
 * Resolution Integration Tests
 */

use crate::support::Player;
use node_perms::permissions::{ResolutionPath, ResolutionStep};
use node_perms::{ExplicitSetting, PermissionProfile, PrincipalRef, ResolutionEngine};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use uuid::Uuid;

fn profile(player: &Arc<Player>) -> PermissionProfile<Player> {
    PermissionProfile::connected(
        PrincipalRef::new(Uuid::new_v4(), player),
        ResolutionEngine::new(),
        None,
    )
}

#[test]
fn test_chain_walk_general_overrides_specific() {
    let player = Arc::new(Player::new("alice").with("a.b.*", true).with("a.*", false));
    let resolution = ResolutionEngine::new().explain(player.as_ref(), None, "a.b.c");

    assert_eq!(player.name, "alice");
    assert_eq!(
        resolution.steps,
        vec![
            ResolutionStep {
                candidate: "a.b.c".to_string(),
                setting: ExplicitSetting::Unset,
            },
            ResolutionStep {
                candidate: "a.b.*".to_string(),
                setting: ExplicitSetting::Granted,
            },
            ResolutionStep {
                candidate: "a.*".to_string(),
                setting: ExplicitSetting::Denied,
            },
            ResolutionStep {
                candidate: "*".to_string(),
                setting: ExplicitSetting::Unset,
            },
        ]
    );
    assert!(!resolution.allowed);
    assert!(!profile(&player).has_permission(None, "a.b.c"));
}

#[test]
fn test_global_wildcard_grants_everything_below() {
    let player = Arc::new(Player::new("admin").with("*", true));
    let profile = profile(&player);

    assert!(profile.has_permission(None, "plots.admin.destroy.other"));
    assert!(profile.has_permission(None, "worldedit.wand"));
    // Single-segment nodes never consult wildcards
    assert!(!profile.has_permission(None, "plots"));
}

#[test]
fn test_fast_path_ignores_conflicting_settings() {
    let player = Arc::new(
        Player::new("bob")
            .with("plots.admin.destroy.other", true)
            .with("plots.admin.*", false)
            .with("*", false),
    );
    let resolution = ResolutionEngine::new().explain(player.as_ref(), None, "plots.admin.destroy.other");

    assert!(resolution.allowed);
    assert_eq!(resolution.path, ResolutionPath::FastPath);
    assert_eq!(resolution.steps.len(), 1);
    assert_eq!(player.query_count(), 1);
}

#[test]
fn test_single_segment_equals_direct_lookup() {
    let granted = Arc::new(Player::new("a").with("fly", true));
    let denied = Arc::new(Player::new("b").with("fly", false).with("*", true));
    let unset = Arc::new(Player::new("c").with("fly.*", true));

    assert!(profile(&granted).has_permission(None, "fly"));
    assert!(!profile(&denied).has_permission(None, "fly"));
    assert!(!profile(&unset).has_permission(None, "fly"));
    assert_eq!(unset.query_count(), 1);
}

#[test]
fn test_scope_is_forwarded() {
    let player = Arc::new(Player::new("carol").with("plots.*", false));
    player.set_in_world("creative", "plots.*", true);
    let profile = profile(&player);

    assert!(profile.has_permission(Some("creative"), "plots.claim"));
    assert!(!profile.has_permission(Some("survival"), "plots.claim"));
    assert!(!profile.has_permission(None, "plots.claim"));
}

#[test]
fn test_backend_changes_are_visible_immediately() {
    let player = Arc::new(Player::new("dave").with("plots.claim", true));
    let profile = profile(&player);

    assert!(profile.has_permission(None, "plots.claim"));
    player.unset("plots.claim");
    assert!(!profile.has_permission(None, "plots.claim"));
    player.set("plots.*", true);
    assert!(profile.has_permission(None, "plots.claim"));
}

#[test]
fn test_idempotent_resolution() {
    let player = Arc::new(Player::new("erin").with("plots.admin.*", true).with("plots.*", false));
    let profile = profile(&player);

    let first = profile.has_permission(None, "plots.admin.kick");
    for _ in 0..10 {
        assert_eq!(profile.has_permission(None, "plots.admin.kick"), first);
    }
}

#[test]
fn test_disconnected_principal_denies() {
    let player = Arc::new(Player::new("frank").with("*", true).with("plots.claim", true));
    let profile = profile(&player);
    assert!(profile.has_permission(None, "plots.claim"));

    drop(player);
    for node in ["plots.claim", "plots", "plots.admin.destroy.other", "*"] {
        assert!(!profile.has_permission(None, node), "{node}");
    }
}

#[test]
fn test_malformed_nodes_deny() {
    let player = Arc::new(Player::new("gina").with("*", true));
    let profile = profile(&player);

    for node in ["plots..claim", ".plots", "plots.", ""] {
        assert!(!profile.has_permission(None, node), "{node:?}");
    }
}
