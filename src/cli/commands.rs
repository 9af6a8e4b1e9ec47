//! Subcommand handlers.

use tracing::debug;

use crate::api::{ApiClient, NewUser, RecordId};
use crate::cli::output;
use crate::cli::{BookingsCommand, Commands, RoomFields, RoomsCommand};
use crate::error::AppError;
use crate::routing::Page;
use crate::security::access_control::{authorize_page, Access};
use crate::session::{Session, SessionStorage};
use crate::views::admin::{self, AdminConsole, RoomForm};
use crate::views::booking::{BookingForm, BookingView};
use crate::views::bookings::{self, BookingsView};
use crate::views::catalog::{self, RoomDetailsView, RoomsView};
use crate::views::{auth_forms, navbar, profile};

/// Turn a typed id into a store id: all digits become a number.
pub fn parse_id(raw: &str) -> RecordId {
    RecordId::from(raw.trim()).coerce_numeric()
}

/// Check the page guard before running a command that stands for `page`.
pub fn enter<S: SessionStorage>(page: &Page, session: &Session<S>) -> Result<(), AppError> {
    match authorize_page(page, session.state()) {
        Access::Allow => Ok(()),
        Access::Pending => Err(AppError::SessionLoading),
        Access::Redirect(redirect) => Err(AppError::Denied {
            page: page.clone(),
            redirect,
        }),
    }
}

/// Run one subcommand against the store.
pub async fn execute<S: SessionStorage>(
    command: Commands,
    json: bool,
    api: &ApiClient,
    session: &mut Session<S>,
) -> Result<(), AppError> {
    debug!(
        logged_in = session.state().is_authenticated(),
        admin = session.state().is_admin(),
        "Running command"
    );

    match command {
        Commands::Rooms { action } => rooms_command(action, json, api, session).await,
        Commands::Book {
            room_id,
            guest,
            check_in,
            check_out,
        } => {
            let page = Page::Booking {
                room_id: room_id.clone(),
            };
            enter(&page, session)?;

            let mut view = BookingView::load(api, &parse_id(&room_id)).await;
            if view.room.is_none() {
                return Err(view
                    .error
                    .unwrap_or_else(|| catalog::ROOM_NOT_FOUND.to_string())
                    .into());
            }

            let form = BookingForm {
                guest_name: guest,
                check_in,
                check_out,
            };
            match view.submit(api, session.state(), &form).await {
                Some(next) => {
                    if json {
                        output::print_json(&view.created)?;
                    } else {
                        println!("{}", view.message().unwrap_or_default());
                        println!("Next: {next}");
                    }
                    Ok(())
                }
                None => Err(view
                    .error
                    .unwrap_or_else(|| catalog::ROOM_NOT_FOUND.to_string())
                    .into()),
            }
        }
        Commands::Bookings { action } => bookings_command(action, json, api, session).await,
        Commands::Signup {
            name,
            email,
            password,
        } => {
            let user = NewUser {
                name,
                email,
                password,
            };
            let next = auth_forms::signup(api, session, &user).await?;
            println!("Account created for {}. Next: {next}", user.email);
            Ok(())
        }
        Commands::Login { email, password } => {
            let next = auth_forms::login(api, session, &email, &password).await?;
            println!("Logged in as {email}. Next: {next}");
            Ok(())
        }
        Commands::AdminLogin { username, password } => {
            let next = auth_forms::admin_login(api, session, &username, &password).await?;
            println!("Logged in as admin {username}. Next: {next}");
            Ok(())
        }
        Commands::Logout => {
            let next = profile::logout(session)?;
            println!("Logged out. Next: {next}");
            Ok(())
        }
        Commands::Profile => {
            enter(&Page::Profile, session)?;
            let view = profile::ProfileView::new(session.state());
            match &view.card {
                Some(card) if json => output::print_json(&serde_json::json!({
                    "name": card.name,
                    "handle": card.handle,
                    "admin": card.admin_badge,
                }))?,
                Some(card) => output::print_profile(card),
                None => println!("{}", view.message().unwrap_or_default()),
            }
            Ok(())
        }
        Commands::Nav => {
            output::print_nav(&navbar::nav_items(session.state()));
            Ok(())
        }
    }
}

async fn rooms_command<S: SessionStorage>(
    action: RoomsCommand,
    json: bool,
    api: &ApiClient,
    session: &mut Session<S>,
) -> Result<(), AppError> {
    match action {
        RoomsCommand::List => {
            let view = RoomsView::load(api).await;
            if let Some(error) = view.error {
                return Err(error.into());
            }
            if json {
                output::print_json(&view.rooms)?;
            } else if let Some(message) = view.empty_message() {
                println!("{message}");
            } else {
                output::print_rooms(&view.rooms);
            }
            Ok(())
        }
        RoomsCommand::Featured => {
            let rooms = catalog::featured_rooms(api).await;
            if json {
                output::print_json(&rooms)?;
            } else if rooms.is_empty() {
                println!("{}", catalog::NO_ROOMS);
            } else {
                output::print_rooms(&rooms);
            }
            Ok(())
        }
        RoomsCommand::Show { id } => {
            let view = RoomDetailsView::load(api, &parse_id(&id)).await;
            if let Some(message) = view.message() {
                return Err(message.to_string().into());
            }
            if let Some(room) = &view.room {
                if json {
                    output::print_json(room)?;
                } else {
                    output::print_room(room);
                    if let Some(book) = view.book_now() {
                        println!("Book Now: {book}");
                    }
                }
            }
            Ok(())
        }
        RoomsCommand::Create(fields) => {
            enter(&Page::Admin, session)?;
            let mut console = AdminConsole::load(api).await;
            console.open_new();
            fill_room_form(&mut console.form, fields);
            let room = console.save(api).await?;
            report_room(json, "Created", &room)
        }
        RoomsCommand::Update { id, fields } => {
            enter(&Page::Admin, session)?;
            let mut console = AdminConsole::load(api).await;
            let room_id = find_room(&console, &id)?;
            console.edit(&room_id);
            fill_room_form(&mut console.form, fields);
            let room = console.save(api).await?;
            report_room(json, "Updated", &room)
        }
        RoomsCommand::Delete { id, yes } => {
            enter(&Page::Admin, session)?;
            let mut console = AdminConsole::load(api).await;
            let room_id = find_room(&console, &id)?;
            let confirmed = yes || output::confirm(admin::DELETE_CONFIRM)?;
            if console.delete(api, &room_id, confirmed).await? {
                println!("Deleted room {room_id}");
            }
            Ok(())
        }
    }
}

async fn bookings_command<S: SessionStorage>(
    action: BookingsCommand,
    json: bool,
    api: &ApiClient,
    session: &mut Session<S>,
) -> Result<(), AppError> {
    enter(&Page::Bookings, session)?;
    let mut view = BookingsView::load(api, session.state()).await;
    if let Some(error) = view.error.take() {
        return Err(error.into());
    }

    match action {
        BookingsCommand::List => {
            if json {
                output::print_json(&view.entries)?;
                return Ok(());
            }
            println!("{}", view.title());
            if view.admin_view {
                println!("Admin View - Showing All User Bookings");
            }
            match view.empty_message() {
                Some(message) => println!("{message}"),
                None => output::print_bookings(&view.entries),
            }
            Ok(())
        }
        BookingsCommand::Edit {
            id,
            guest,
            check_in,
            check_out,
        } => {
            let booking_id = find_booking(&view, &id)?;
            view.begin_edit(&booking_id);
            if let Some(form) = view.edit_form_mut() {
                if let Some(guest) = guest {
                    form.guest_name = guest;
                }
                if let Some(check_in) = check_in {
                    form.check_in = check_in;
                }
                if let Some(check_out) = check_out {
                    form.check_out = check_out;
                }
            }
            view.save_edit(api).await?;

            match view.find(&booking_id) {
                Some(entry) if json => output::print_json(entry)?,
                Some(entry) => output::print_bookings(std::slice::from_ref(entry)),
                None => {}
            }
            Ok(())
        }
        BookingsCommand::Delete { id, yes } => {
            let booking_id = find_booking(&view, &id)?;
            let confirmed = yes || output::confirm(bookings::DELETE_CONFIRM)?;
            if view.delete(api, &booking_id, confirmed).await? {
                println!("Deleted booking {booking_id}");
            }
            Ok(())
        }
    }
}

fn find_booking(view: &BookingsView, raw: &str) -> Result<RecordId, AppError> {
    view.entries
        .iter()
        .find(|e| e.booking.id.matches(raw))
        .map(|e| e.booking.id.clone())
        .ok_or_else(|| AppError::UnknownRecord {
            kind: "booking",
            id: raw.to_string(),
        })
}

fn find_room(console: &AdminConsole, raw: &str) -> Result<RecordId, AppError> {
    console
        .rooms
        .iter()
        .find(|r| r.id.matches(raw))
        .map(|r| r.id.clone())
        .ok_or_else(|| AppError::UnknownRecord {
            kind: "room",
            id: raw.to_string(),
        })
}

fn fill_room_form(form: &mut RoomForm, fields: RoomFields) {
    let RoomFields {
        name,
        room_type,
        price,
        capacity,
        description,
        image,
        amenities,
    } = fields;

    let slots = [
        (&mut form.name, name),
        (&mut form.room_type, room_type),
        (&mut form.price, price),
        (&mut form.capacity, capacity),
        (&mut form.description, description),
        (&mut form.image, image),
        (&mut form.amenities, amenities),
    ];
    for (slot, value) in slots {
        if let Some(value) = value {
            *slot = value;
        }
    }
}

fn report_room(json: bool, verb: &str, room: &crate::api::Room) -> Result<(), AppError> {
    if json {
        output::print_json(room)?;
    } else {
        println!("{verb} room {}", catalog::room_summary(room));
    }
    Ok(())
}
