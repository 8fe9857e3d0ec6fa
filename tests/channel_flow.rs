//! Integration tests for channel flows over TCP.

mod common;

use common::{TestClient, TestServer};

#[tokio::test]
async fn test_public_channel_flow() {
    let server = TestServer::spawn().await.expect("Failed to spawn test server");
    let mut alice = TestClient::connect(&server.address()).await.expect("connect alice");
    let mut bob = TestClient::connect(&server.address()).await.expect("connect bob");
    assert_eq!(alice.nick(), "User0");
    assert_eq!(bob.nick(), "User1");

    alice.send_raw("CREATE Room 0").await.unwrap();
    assert_eq!(alice.recv().await.unwrap(), ":User0 CREATE Room 0");

    bob.send_raw("JOIN Room").await.unwrap();
    assert_eq!(alice.recv().await.unwrap(), ":User1 JOIN Room");
    assert_eq!(bob.recv().await.unwrap(), ":User1 JOIN Room");
    assert_eq!(bob.recv().await.unwrap(), ":test.server NAMES Room :@User0 User1");

    bob.send_raw("MESG Room :hello, world").await.unwrap();
    assert_eq!(alice.recv().await.unwrap(), ":User1 MESG Room :hello, world");
    assert_eq!(bob.recv().await.unwrap(), ":User1 MESG Room :hello, world");

    alice.send_raw("NICK Zero").await.unwrap();
    assert_eq!(alice.recv().await.unwrap(), ":User0 NICK Zero");
    assert_eq!(bob.recv().await.unwrap(), ":User0 NICK Zero");

    alice.send_raw("MESG Room :renamed").await.unwrap();
    assert_eq!(bob.recv().await.unwrap(), ":Zero MESG Room :renamed");
    assert_eq!(alice.recv().await.unwrap(), ":Zero MESG Room :renamed");
}

#[tokio::test]
async fn test_private_channel_rejects_join() {
    let server = TestServer::spawn().await.expect("Failed to spawn test server");
    let mut owner = TestClient::connect(&server.address()).await.unwrap();
    let mut other = TestClient::connect(&server.address()).await.unwrap();

    owner.send_raw("CREATE Priv 1").await.unwrap();
    assert_eq!(owner.recv().await.unwrap(), ":User0 CREATE Priv 1");

    other.send_raw("JOIN Priv").await.unwrap();
    let reply = other.recv().await.unwrap();
    assert!(reply.starts_with(":test.server 405 User1 :"), "{reply}");
    owner.expect_silence().await;
}

#[tokio::test]
async fn test_invite_and_kick() {
    let server = TestServer::spawn().await.expect("Failed to spawn test server");
    let mut owner = TestClient::connect(&server.address()).await.unwrap();
    let mut guest = TestClient::connect(&server.address()).await.unwrap();

    owner.send_raw("CREATE Priv 1").await.unwrap();
    owner.recv().await.unwrap();

    owner.send_raw("INVITE Priv User1").await.unwrap();
    assert_eq!(owner.recv().await.unwrap(), ":User0 INVITE Priv User1");
    let lines = guest
        .recv_until(|line| line.contains(" NAMES "))
        .await
        .unwrap();
    assert_eq!(
        lines,
        vec![
            ":User0 INVITE Priv User1".to_string(),
            ":test.server NAMES Priv :@User0 User1".to_string(),
        ]
    );

    guest.send_raw("KICK Priv User0").await.unwrap();
    let reply = guest.recv().await.unwrap();
    assert!(reply.starts_with(":test.server 404 User1 :"), "{reply}");

    owner.send_raw("KICK Priv User1").await.unwrap();
    assert_eq!(owner.recv().await.unwrap(), ":User0 KICK Priv User1");
    assert_eq!(guest.recv().await.unwrap(), ":User0 KICK Priv User1");

    guest.send_raw("MESG Priv :let me in").await.unwrap();
    let reply = guest.recv().await.unwrap();
    assert!(reply.starts_with(":test.server 403 User1 :"), "{reply}");
}

#[tokio::test]
async fn test_owner_leave_destroys_channel() {
    let server = TestServer::spawn().await.expect("Failed to spawn test server");
    let mut owner = TestClient::connect(&server.address()).await.unwrap();
    let mut member = TestClient::connect(&server.address()).await.unwrap();

    owner.send_raw("CREATE Room 0").await.unwrap();
    owner.recv().await.unwrap();
    member.send_raw("JOIN Room").await.unwrap();
    member.recv_until(|line| line.contains(" NAMES ")).await.unwrap();
    owner.recv().await.unwrap();

    owner.send_raw("LEAVE Room").await.unwrap();
    assert_eq!(owner.recv().await.unwrap(), ":User0 LEAVE Room");
    assert_eq!(member.recv().await.unwrap(), ":User0 LEAVE Room");

    member.send_raw("MESG Room :anyone?").await.unwrap();
    let reply = member.recv().await.unwrap();
    assert_eq!(reply, ":test.server 401 User1 :No such channel");
}
