//! Subcommands driven against the in-process store with an in-memory session.

mod common;

use common::{seed_hotel, start_mock_store, stay};
use hotel_booking::cli::commands::execute;
use hotel_booking::cli::{BookingsCommand, Commands, RoomFields, RoomsCommand};
use hotel_booking::routing::Page;
use hotel_booking::session::{MemoryStorage, Session, SessionStorage, USER_KEY};
use hotel_booking::AppError;

fn session() -> Session<MemoryStorage> {
    Session::restore_from(MemoryStorage::new())
}

fn login(email: &str, password: &str) -> Commands {
    Commands::Login {
        email: email.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn test_public_commands_need_no_login() {
    let (api, store) = start_mock_store().await;
    seed_hotel(&store);
    let mut session = session();

    let list = Commands::Rooms {
        action: RoomsCommand::List,
    };
    execute(list, true, &api, &mut session).await.unwrap();

    let show = Commands::Rooms {
        action: RoomsCommand::Show { id: "2".into() },
    };
    execute(show, false, &api, &mut session).await.unwrap();

    execute(Commands::Nav, false, &api, &mut session).await.unwrap();
}

#[tokio::test]
async fn test_missing_room_is_reported() {
    let (api, store) = start_mock_store().await;
    seed_hotel(&store);
    let mut session = session();

    let show = Commands::Rooms {
        action: RoomsCommand::Show { id: "77".into() },
    };
    let err = execute(show, false, &api, &mut session).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to load room details.");
}

#[tokio::test]
async fn test_booking_requires_login() {
    let (api, store) = start_mock_store().await;
    seed_hotel(&store);
    let mut session = session();

    let book = Commands::Book {
        room_id: "1".into(),
        guest: "Asha".into(),
        check_in: "2026-11-01".into(),
        check_out: "2026-11-02".into(),
    };
    let err = execute(book, false, &api, &mut session).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Denied {
            redirect: Page::Login,
            ..
        }
    ));
    assert_eq!(store.records("bookings").len(), 3);
}

#[tokio::test]
async fn test_login_then_book() {
    let (api, store) = start_mock_store().await;
    seed_hotel(&store);
    let mut session = session();

    execute(login("asha@example.com", "asha123"), false, &api, &mut session)
        .await
        .unwrap();
    assert!(session.storage().get(USER_KEY).is_some());

    let (check_in, check_out) = stay(30, 3);
    let book = Commands::Book {
        room_id: "2".into(),
        guest: "Asha Rao".into(),
        check_in,
        check_out,
    };
    execute(book, true, &api, &mut session).await.unwrap();

    let stored = store.records("bookings").pop().unwrap();
    assert_eq!(stored["roomId"], 2);
    assert_eq!(stored["userId"], 1);
}

#[tokio::test]
async fn test_bad_login_keeps_session_empty() {
    let (api, store) = start_mock_store().await;
    seed_hotel(&store);
    let mut session = session();

    let err = execute(login("asha@example.com", "nope"), false, &api, &mut session)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid email or password");
    assert!(!session.state().is_authenticated());
}

#[tokio::test]
async fn test_guest_cannot_administer_rooms() {
    let (api, store) = start_mock_store().await;
    seed_hotel(&store);
    let mut session = session();
    execute(login("asha@example.com", "asha123"), false, &api, &mut session)
        .await
        .unwrap();

    let delete = Commands::Rooms {
        action: RoomsCommand::Delete {
            id: "1".into(),
            yes: true,
        },
    };
    let err = execute(delete, false, &api, &mut session).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Denied {
            redirect: Page::AdminLogin,
            ..
        }
    ));
    assert_eq!(store.records("rooms").len(), 4);
}

#[tokio::test]
async fn test_admin_updates_and_deletes_room() {
    let (api, store) = start_mock_store().await;
    seed_hotel(&store);
    let mut session = session();

    let admin_login = Commands::AdminLogin {
        username: "admin".into(),
        password: "admin123".into(),
    };
    execute(admin_login, false, &api, &mut session).await.unwrap();

    let update = Commands::Rooms {
        action: RoomsCommand::Update {
            id: "3".into(),
            fields: RoomFields {
                price: Some("2750".into()),
                ..RoomFields::default()
            },
        },
    };
    execute(update, false, &api, &mut session).await.unwrap();
    let room = &store.records("rooms")[2];
    assert_eq!(room["price"], 2750.0);
    assert_eq!(room["name"], "Budget Twin");

    let delete = Commands::Rooms {
        action: RoomsCommand::Delete {
            id: "3".into(),
            yes: true,
        },
    };
    execute(delete, false, &api, &mut session).await.unwrap();
    assert_eq!(store.records("rooms").len(), 3);

    let missing = Commands::Rooms {
        action: RoomsCommand::Delete {
            id: "3".into(),
            yes: true,
        },
    };
    let err = execute(missing, false, &api, &mut session).await.unwrap_err();
    assert_eq!(err.to_string(), "No room with id 3");
}

#[tokio::test]
async fn test_guest_edits_only_own_booking() {
    let (api, store) = start_mock_store().await;
    seed_hotel(&store);
    let mut session = session();
    execute(login("vikram@example.com", "vik456"), false, &api, &mut session)
        .await
        .unwrap();

    let foreign = Commands::Bookings {
        action: BookingsCommand::Edit {
            id: "1".into(),
            guest: Some("Someone".into()),
            check_in: None,
            check_out: None,
        },
    };
    let err = execute(foreign, false, &api, &mut session).await.unwrap_err();
    assert!(matches!(err, AppError::UnknownRecord { kind: "booking", .. }));

    let own = Commands::Bookings {
        action: BookingsCommand::Edit {
            id: "2".into(),
            guest: Some("V. Shah".into()),
            check_in: None,
            check_out: None,
        },
    };
    execute(own, false, &api, &mut session).await.unwrap();
    assert_eq!(store.records("bookings")[1]["guestName"], "V. Shah");
}

#[tokio::test]
async fn test_logout_clears_session() {
    let (api, store) = start_mock_store().await;
    seed_hotel(&store);
    let mut session = session();
    execute(login("asha@example.com", "asha123"), false, &api, &mut session)
        .await
        .unwrap();

    execute(Commands::Logout, false, &api, &mut session).await.unwrap();
    assert!(!session.state().is_authenticated());
    assert!(session.storage().get(USER_KEY).is_none());

    let err = execute(Commands::Profile, false, &api, &mut session)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Denied { .. }));
}
