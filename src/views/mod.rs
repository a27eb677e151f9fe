//! HTML rendering. Pages receive already-fetched rows and produce markup;
//! no store access happens here.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as esc};

use crate::models::booking::{BookingWithRoom, KNOWN_STATUSES};
use crate::models::room::Room;
use crate::pagination::Page;
use crate::session::Flash;

fn layout(title: &str, flashes: &[Flash], body: &str) -> String {
    let mut flash_html = String::new();
    for flash in flashes {
        let _ = write!(
            flash_html,
            r#"<div class="alert alert-{}">{}</div>"#,
            esc(&flash.level),
            esc(&flash.message)
        );
    }
    format!(
        r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>{title} - Innhouse</title>
<style>
body {{ font-family: sans-serif; margin: 2em; }}
table {{ border-collapse: collapse; }}
th, td {{ border: 1px solid #ccc; padding: 0.4em 0.8em; }}
.alert {{ padding: 0.6em 1em; margin: 0.5em 0; border-radius: 4px; }}
.alert-success {{ background: #d4edda; }}
.alert-warning {{ background: #fff3cd; }}
.alert-danger {{ background: #f8d7da; }}
nav a {{ margin-right: 1em; }}
</style>
</head>
<body>
<nav>
<a href="/">Home</a>
<a href="/rooms">Rooms</a>
<a href="/bookings">Bookings</a>
<a href="/admin">Admin</a>
</nav>
{flash_html}
{body}
</body>
</html>
"#,
        title = esc(title),
    )
}

fn rooms_table(rooms: &[Room]) -> String {
    let mut rows = String::new();
    for room in rooms {
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{:.2}</td><td>{}</td></tr>",
            esc(&room.number),
            esc(&room.kind),
            room.price,
            if room.available { "available" } else { "occupied" }
        );
    }
    format!(
        "<table><tr><th>Number</th><th>Type</th><th>Price</th><th>Status</th></tr>{rows}</table>"
    )
}

fn booking_form(rooms: &[Room]) -> String {
    let mut options = String::new();
    for room in rooms.iter().filter(|r| r.available) {
        let _ = write!(
            options,
            r#"<option value="{}">{} ({})</option>"#,
            room.id,
            esc(&room.number),
            esc(&room.kind)
        );
    }
    format!(
        r#"<h2>Book a room</h2>
<form method="post" action="/book">
<label>Name <input type="text" name="name"></label><br>
<label>Room <select name="room_id">{options}</select></label><br>
<label>Check-in <input type="date" name="checkin"></label><br>
<label>Check-out <input type="date" name="checkout"></label><br>
<button type="submit">Book</button>
</form>"#
    )
}

pub fn index_page(rooms: &[Room], flashes: &[Flash]) -> String {
    let body = format!(
        "<h1>Welcome</h1>{}{}",
        rooms_table(rooms),
        booking_form(rooms)
    );
    layout("Home", flashes, &body)
}

pub fn rooms_page(rooms: &[Room], flashes: &[Flash]) -> String {
    let body = format!("<h1>Rooms</h1>{}", rooms_table(rooms));
    layout("Rooms", flashes, &body)
}

pub fn bookings_page(bookings: &[BookingWithRoom], flashes: &[Flash]) -> String {
    let mut rows = String::new();
    for b in bookings {
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            esc(&b.customer_name),
            esc(&b.room_number),
            b.checkin,
            b.checkout
        );
    }
    let body = format!(
        "<h1>Bookings</h1><table><tr><th>Customer</th><th>Room</th><th>Check-in</th><th>Check-out</th></tr>{rows}</table>"
    );
    layout("Bookings", flashes, &body)
}

pub fn login_page(flashes: &[Flash], next: &str) -> String {
    let body = format!(
        r#"<h1>Admin login</h1>
<form method="post" action="/admin/login?next={}">
<label>Username <input type="text" name="username"></label><br>
<label>Password <input type="password" name="password"></label><br>
<button type="submit">Log in</button>
</form>"#,
        attr(next)
    );
    layout("Login", flashes, &body)
}

fn pager(base: &str, page: &Page, q: &str) -> String {
    let mut html = String::from("<p>");
    if page.has_prev() {
        let _ = write!(
            html,
            r#"<a href="{base}?page={}&q={}">&laquo; prev</a> "#,
            page.current - 1,
            attr(q)
        );
    }
    let _ = write!(html, "page {} of {}", page.current, page.total_pages);
    if page.has_next() {
        let _ = write!(
            html,
            r#" <a href="{base}?page={}&q={}">next &raquo;</a>"#,
            page.current + 1,
            attr(q)
        );
    }
    html.push_str("</p>");
    html
}

fn search_box(base: &str, q: &str) -> String {
    format!(
        r#"<form method="get" action="{base}">
<input type="text" name="q" value="{}" placeholder="search">
<button type="submit">Search</button>
</form>"#,
        attr(q)
    )
}

pub fn admin_rooms_page(rooms: &[Room], page: &Page, q: &str, flashes: &[Flash]) -> String {
    let mut rows = String::new();
    for room in rooms {
        let _ = write!(
            rows,
            r#"<tr><td>{}</td><td>{}</td><td>{:.2}</td><td>{}</td>
<td><a href="/admin/rooms/{id}/edit">edit</a>
<form method="post" action="/admin/rooms/{id}/delete" style="display:inline"><button>delete</button></form></td></tr>"#,
            esc(&room.number),
            esc(&room.kind),
            room.price,
            if room.available { "yes" } else { "no" },
            id = room.id
        );
    }
    let body = format!(
        r#"<h1>Rooms (admin)</h1>
<p><a href="/admin/rooms/new">New room</a> | <a href="/admin/bookings">Bookings</a> | <a href="/admin/logout">Log out</a></p>
{search}
<table><tr><th>Number</th><th>Type</th><th>Price</th><th>Available</th><th></th></tr>{rows}</table>
{pager}"#,
        search = search_box("/admin/rooms", q),
        pager = pager("/admin/rooms", page, q),
    );
    layout("Rooms (admin)", flashes, &body)
}

pub fn room_form_page(action: &str, room: Option<&Room>, flashes: &[Flash]) -> String {
    let target = match room {
        Some(room) => format!("/admin/rooms/{}/edit", room.id),
        None => "/admin/rooms/new".to_string(),
    };
    let number = room.map(|r| r.number.as_str()).unwrap_or("");
    let kind = room.map(|r| r.kind.as_str()).unwrap_or("");
    let price = room.map(|r| r.price.to_string()).unwrap_or_default();
    let checked = if room.map(|r| r.available).unwrap_or(true) {
        " checked"
    } else {
        ""
    };
    let body = format!(
        r#"<h1>{action} room</h1>
<form method="post" action="{target}">
<label>Number <input type="text" name="number" value="{}"></label><br>
<label>Type <input type="text" name="type" value="{}"></label><br>
<label>Price <input type="text" name="price" value="{}"></label><br>
<label>Available <input type="checkbox" name="available"{checked}></label><br>
<button type="submit">Save</button>
</form>
<p><a href="/admin/rooms">Back</a></p>"#,
        attr(number),
        attr(kind),
        attr(&price),
        action = esc(action),
    );
    layout("Room form", flashes, &body)
}

pub fn admin_bookings_page(
    bookings: &[BookingWithRoom],
    page: &Page,
    q: &str,
    flashes: &[Flash],
) -> String {
    let mut rows = String::new();
    for b in bookings {
        let _ = write!(
            rows,
            r#"<tr><td><a href="/admin/bookings/{id}">{id}</a></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>
<td><form method="post" action="/admin/bookings/{id}/delete" style="display:inline"><button>delete</button></form></td></tr>"#,
            esc(&b.customer_name),
            esc(&b.room_number),
            b.checkin,
            b.checkout,
            esc(&b.status),
            id = b.id
        );
    }
    let body = format!(
        r#"<h1>Bookings (admin)</h1>
<p><a href="/admin/rooms">Rooms</a> | <a href="/admin/logout">Log out</a></p>
{search}
<table><tr><th>#</th><th>Customer</th><th>Room</th><th>Check-in</th><th>Check-out</th><th>Status</th><th></th></tr>{rows}</table>
{pager}"#,
        search = search_box("/admin/bookings", q),
        pager = pager("/admin/bookings", page, q),
    );
    layout("Bookings (admin)", flashes, &body)
}

pub fn booking_detail_page(booking: &BookingWithRoom, flashes: &[Flash]) -> String {
    let mut options = String::new();
    for status in KNOWN_STATUSES {
        let selected = if booking.status == status {
            " selected"
        } else {
            ""
        };
        let _ = write!(options, r#"<option value="{status}"{selected}>{status}</option>"#);
    }
    let body = format!(
        r#"<h1>Booking #{id}</h1>
<p>Customer: {}</p>
<p>Room: {}</p>
<p>Check-in: {} &mdash; Check-out: {}</p>
<p>Status: {}</p>
<form method="post" action="/admin/bookings/{id}">
<label>New status <select name="status">{options}</select></label>
<button type="submit">Update</button>
</form>
<p><a href="/admin/bookings">Back</a></p>"#,
        esc(&booking.customer_name),
        esc(&booking.room_number),
        booking.checkin,
        booking.checkout,
        esc(&booking.status),
        id = booking.id,
    );
    layout("Booking detail", flashes, &body)
}
