//! Terminal rendering of view state.

use serde::Serialize;
use std::io::{self, BufRead, Write};

use crate::api::Room;
use crate::views::bookings::BookingEntry;
use crate::views::catalog::room_summary;
use crate::views::navbar::NavItem;
use crate::views::profile::ProfileCard;

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_rooms(rooms: &[Room]) {
    for room in rooms {
        println!("{}", room_summary(room));
    }
}

pub fn print_room(room: &Room) {
    println!("{}", room.name);
    println!("  Type:      {}", room.room_type);
    println!("  Price:     ₹{}", room.price);
    println!("  Capacity:  {} guests", room.capacity);
    if !room.description.is_empty() {
        println!("  {}", room.description);
    }
    if !room.amenities.is_empty() {
        println!("  Amenities: {}", room.amenities.join(", "));
    }
}

pub fn print_bookings(entries: &[BookingEntry]) {
    for entry in entries {
        let b = &entry.booking;
        let room = entry
            .room
            .as_ref()
            .map(|r| format!("{} (₹{})", r.name, r.price))
            .unwrap_or_else(|| match &b.room_id {
                Some(id) => format!("room {id} (Room Not Found)"),
                None => "Room Not Found".to_string(),
            });
        println!(
            "{}  {}  {}  {} → {}",
            b.id, b.guest_name, room, b.check_in, b.check_out
        );
    }
}

pub fn print_profile(card: &ProfileCard) {
    println!("[{}] {}", card.initial, card.name);
    println!("  {}", card.handle);
    if card.admin_badge {
        println!("  Admin Account");
    }
}

pub fn print_nav(items: &[NavItem]) {
    for item in items {
        match item {
            NavItem::Link { label, target } => println!("{label:<14} {target}"),
            other => println!("{}", other.label()),
        }
    }
}

/// Ask a yes/no question on the terminal. Anything but `y`/`yes` is a no.
pub fn confirm(prompt: &str) -> io::Result<bool> {
    let stdin = io::stdin();
    confirm_with(prompt, &mut stdin.lock(), &mut io::stderr())
}

fn confirm_with(prompt: &str, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<bool> {
    write!(out, "{prompt} [y/N] ")?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
