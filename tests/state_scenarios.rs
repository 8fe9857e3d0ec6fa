//! End-to-end state scenarios driven through the public library API.

use slchat_proto::{Command, ServerResponse};
use slchatd::handlers::apply;
use slchatd::notification::Notification;
use slchatd::state::Matrix;
use std::collections::BTreeSet;

fn set(nicks: &[&str]) -> BTreeSet<String> {
    nicks.iter().map(|s| s.to_string()).collect()
}

fn matrix_with_users(count: u64) -> Matrix {
    let mut matrix = Matrix::new();
    for id in 0..count {
        matrix.register_user(id);
    }
    matrix
}

/// Every channel's owner is one of its members, and nicknames map back to
/// the ids that hold them.
fn assert_consistent(matrix: &Matrix) {
    for channel in matrix.channels() {
        let owner = matrix.owner(&channel).expect("channel without owner");
        assert!(
            matrix.users_in_channel(&channel).contains(owner),
            "owner {owner} missing from {channel}"
        );
        for member in matrix.users_in_channel(&channel) {
            assert!(matrix.user_id(&member).is_some(), "{member} in {channel} is not registered");
        }
    }
    for nick in matrix.registered_users() {
        let id = matrix.user_id(&nick).expect("nickname without id");
        assert_eq!(matrix.nickname(id), Some(nick.as_str()));
    }
}

#[test]
fn test_join_then_rename_owner() {
    let mut matrix = Matrix::new();
    assert_eq!(matrix.register_user(0), Notification::connected("User0"));
    assert_eq!(matrix.register_user(1), Notification::connected("User1"));
    assert_eq!(matrix.register_user(2), Notification::connected("User2"));

    let create = Command::create(0, "User0", "Room", false);
    assert_eq!(
        apply(&mut matrix, &create),
        Notification::okay(&create, ["User0"])
    );

    let join = Command::join(1, "User1", "Room");
    assert_eq!(
        apply(&mut matrix, &join),
        Notification::names(&join, ["User0"], "User1", "Room", ["User0", "User1"], "User0")
    );

    let nick = Command::nick(0, "User0", "Zero");
    assert_eq!(
        apply(&mut matrix, &nick),
        Notification::okay(&nick, ["User0", "User1"])
    );
    assert_eq!(matrix.owner("Room"), Some("Zero"));
    assert_eq!(matrix.users_in_channel("Room"), set(&["Zero", "User1"]));
    assert_consistent(&matrix);
}

#[test]
fn test_private_channel_join_rejected() {
    let mut matrix = matrix_with_users(2);
    apply(&mut matrix, &Command::create(0, "User0", "Priv", true));

    let join = Command::join(1, "User1", "Priv");
    assert_eq!(
        apply(&mut matrix, &join),
        Notification::error(&join, ServerResponse::JOIN_PRIVATE_CHANNEL)
    );
    assert_eq!(matrix.users_in_channel("Priv"), set(&["User0"]));
}

#[test]
fn test_owner_disconnect() {
    let mut matrix = matrix_with_users(2);
    apply(&mut matrix, &Command::create(0, "User0", "Room", false));
    apply(&mut matrix, &Command::join(1, "User1", "Room"));

    assert_eq!(
        matrix.deregister_user(0),
        Some(Notification::disconnected("User0", ["User1"]))
    );
    assert!(matrix.channels().is_empty());

    // The id and the default nickname are both free again.
    assert_eq!(matrix.register_user(0), Notification::connected("User0"));
    assert_consistent(&matrix);
}

#[test]
fn test_kick_by_non_owner() {
    let mut matrix = matrix_with_users(3);
    apply(&mut matrix, &Command::create(0, "User0", "Room", false));
    apply(&mut matrix, &Command::join(1, "User1", "Room"));
    apply(&mut matrix, &Command::join(2, "User2", "Room"));

    let kick = Command::kick(1, "User1", "Room", "User2");
    assert_eq!(
        apply(&mut matrix, &kick),
        Notification::error(&kick, ServerResponse::USER_NOT_OWNER)
    );
    assert_eq!(matrix.users_in_channel("Room"), set(&["User0", "User1", "User2"]));
}

#[test]
fn test_rename_to_taken_name_changes_nothing() {
    let mut matrix = matrix_with_users(2);
    apply(&mut matrix, &Command::create(1, "User1", "Room", false));

    for target in ["User0", "User1"] {
        let nick = Command::nick(1, "User1", target);
        assert_eq!(
            apply(&mut matrix, &nick),
            Notification::error(&nick, ServerResponse::NAME_ALREADY_IN_USE)
        );
    }
    assert_eq!(matrix.registered_users(), set(&["User0", "User1"]));
    assert_eq!(matrix.owner("Room"), Some("User1"));
}

#[test]
fn test_double_join_is_idempotent() {
    let mut matrix = matrix_with_users(2);
    apply(&mut matrix, &Command::create(0, "User0", "Room", false));
    apply(&mut matrix, &Command::join(1, "User1", "Room"));
    apply(&mut matrix, &Command::join(1, "User1", "Room"));

    assert_eq!(matrix.users_in_channel("Room").len(), 2);
}

/// Drive a long deterministic mix of commands and disconnects and check the
/// cross-collection invariants after every step.
#[test]
fn test_invariants_hold_over_mixed_workload() {
    const CHANNELS: [&str; 3] = ["Room", "Priv", "Den"];
    const NAMES: [&str; 4] = ["Zero", "One", "User1", "bad name"];

    let mut matrix = Matrix::new();
    let mut next_id = 0;
    let mut seed: u64 = 0x5eed;
    let mut rand = move |bound: u64| {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (seed >> 33) % bound
    };

    for _ in 0..6 {
        matrix.register_user(next_id);
        next_id += 1;
    }

    for _ in 0..2000 {
        let ids: Vec<u64> = (0..next_id).filter(|id| matrix.nickname(*id).is_some()).collect();
        if ids.is_empty() || rand(20) == 0 {
            matrix.register_user(next_id);
            next_id += 1;
            continue;
        }
        let id = ids[rand(ids.len() as u64) as usize];
        let sender = matrix.nickname(id).map(str::to_owned).unwrap_or_default();
        let channel = CHANNELS[rand(CHANNELS.len() as u64) as usize];
        let other_id = ids[rand(ids.len() as u64) as usize];
        let target = matrix.nickname(other_id).map(str::to_owned).unwrap_or_default();

        let cmd = match rand(9) {
            0 => Command::nick(id, sender.as_str(), NAMES[rand(NAMES.len() as u64) as usize]),
            1 => Command::create(id, sender.as_str(), channel, channel == "Priv"),
            2 | 3 => Command::join(id, sender.as_str(), channel),
            4 => Command::message(id, sender.as_str(), channel, "hi"),
            5 => Command::leave(id, sender.as_str(), channel),
            6 => Command::invite(id, sender.as_str(), channel, target.as_str()),
            7 => Command::kick(id, sender.as_str(), channel, target.as_str()),
            _ => {
                let notification = matrix.deregister_user(id).expect("registered id");
                assert!(!notification.recipients().contains(&sender));
                assert_consistent(&matrix);
                continue;
            }
        };

        let before = matrix.registered_users();
        let notification = apply(&mut matrix, &cmd);
        if notification.is_error() {
            assert_eq!(notification.recipients(), set(&[sender.as_str()]));
        }
        assert_eq!(matrix.registered_users().len(), before.len());
        assert_consistent(&matrix);
    }
}
