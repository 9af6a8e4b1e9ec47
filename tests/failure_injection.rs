//! Pages facing a store that answers every request with 500.

mod common;

use common::{seed_hotel, start_mock_store, stay};
use hotel_booking::api::RecordId;
use hotel_booking::session::{MemoryStorage, Session};
use hotel_booking::views::auth_forms::{self, LOGIN_FAILED};
use hotel_booking::views::booking::{BookingForm, BookingView, BOOKING_FAILED};
use hotel_booking::views::bookings::{BookingsView, BOOKINGS_LOAD_FAILED, DELETE_FAILED};
use hotel_booking::views::catalog::{featured_rooms, RoomsView, ROOMS_LOAD_FAILED};

#[tokio::test]
async fn test_room_list_shows_banner() {
    let (api, store) = start_mock_store().await;
    seed_hotel(&store);
    store.fail("rooms");

    let view = RoomsView::load(&api).await;
    assert_eq!(view.error.as_deref(), Some(ROOMS_LOAD_FAILED));
    assert_eq!(view.empty_message(), None);
    assert!(featured_rooms(&api).await.is_empty());
}

#[tokio::test]
async fn test_bookings_survive_missing_rooms() {
    let (api, store) = start_mock_store().await;
    seed_hotel(&store);
    store.fail("rooms");

    let session = Session::restore_from(MemoryStorage::new());
    let view = BookingsView::load(&api, session.state()).await;
    assert_eq!(view.error, None);
    assert_eq!(view.entries.len(), 3);
    assert!(view.entries.iter().all(|e| e.room.is_none()));
}

#[tokio::test]
async fn test_bookings_load_failure() {
    let (api, store) = start_mock_store().await;
    seed_hotel(&store);
    store.fail("bookings");

    let session = Session::restore_from(MemoryStorage::new());
    let view = BookingsView::load(&api, session.state()).await;
    assert_eq!(view.error.as_deref(), Some(BOOKINGS_LOAD_FAILED));
    assert!(view.entries.is_empty());
}

#[tokio::test]
async fn test_booking_submit_failure() {
    let (api, store) = start_mock_store().await;
    seed_hotel(&store);
    let mut view = BookingView::load(&api, &RecordId::Num(1)).await;
    store.fail("bookings");

    let session = Session::restore_from(MemoryStorage::new());
    let (check_in, check_out) = stay(1, 1);
    let form = BookingForm {
        guest_name: "Walk-in".into(),
        check_in,
        check_out,
    };
    assert_eq!(view.submit(&api, session.state(), &form).await, None);
    assert_eq!(view.message(), Some(BOOKING_FAILED));
    assert!(!view.success);
}

#[tokio::test]
async fn test_delete_failure_keeps_entry() {
    let (api, store) = start_mock_store().await;
    seed_hotel(&store);
    let session = Session::restore_from(MemoryStorage::new());
    let mut view = BookingsView::load(&api, session.state()).await;
    store.fail("bookings");

    let result = view.delete(&api, &RecordId::Num(2), true).await;
    assert_eq!(result, Err(DELETE_FAILED));
    assert!(view.find(&RecordId::Num(2)).is_some());
}

#[tokio::test]
async fn test_login_failure_message() {
    let (api, store) = start_mock_store().await;
    seed_hotel(&store);
    store.fail("users");

    let mut session = Session::restore_from(MemoryStorage::new());
    let err = auth_forms::login(&api, &mut session, "asha@example.com", "asha123")
        .await
        .unwrap_err();
    assert_eq!(err, "Request failed with status code 500");
    assert_ne!(err, LOGIN_FAILED);
    assert!(!session.state().is_authenticated());
}
