// tests/common/mod.rs
//
// Fixture builders shaped like the upstream listing markup.
#![allow(dead_code)]

use festival_programme::config::consts::CHUNK_MARKER;

pub fn event(id: &str, date: &str, time: &str, venue: &str, session: &str) -> String {
    format!(
        r#"<div class="productItem">
  <a name="product-id-{id}-a-talk"></a>
  <div class="product_details_inner">
    <div class="programme-page--date">{date}</div>
    <div class="programme-page--time">{time}</div>
    <div>Venue: {venue}</div>
    <div class="sessiontype">{session}</div>
    <h3><a href="/events/{id}">Talk {id}</a></h3>
  </div>
  <img src="/assets/{id}.jpg" alt="">
  <div class="ht-fpe--event-ticket-wrapper"><form action="/cart"><img src="/assets/buy.png"><input type="submit" value="Buy"></form></div>
</div>
"#
    )
}

/// A day block: heading followed by its events, all inside one container.
pub fn day(label: &str, events: &[String]) -> String {
    format!(
        r#"<div class="programme-day"><h2 class="htlgi-heading__small--text">{label}</h2>
{}</div>
"#,
        events.concat()
    )
}

/// Fast-pass header and festival ticket link the upstream puts above the listing.
pub fn ticket_banner() -> String {
    s(r#"<div class="ticket-banner"><a class="ht-fpe--fast-pass-header" href="/fastpass">Fast Pass holders</a><div class="ht-fpe--festival-ticket"><a href="/tickets">Buy festival tickets</a></div></div>
"#)
}

/// Stitch page bodies the way the acquirer does.
pub fn raw(chunks: &[String]) -> String {
    chunks.iter().map(|c| format!("{CHUNK_MARKER}{c}")).collect()
}

/// A small two-page programme over three days.
pub fn programme() -> String {
    raw(&[
        ticket_banner()
            + &day(
                "Fri 23 May",
                &[
                    event("101", "Fri 23 May", "4:15pm", "Tent A", "Debate"),
                    event("102", "Fri 23 May", "6:00pm", "Tent B", "Talk"),
                ],
            )
            + &day("Sat 24 May", &[event("103", "Sat 24 May", "10:00am", "Tent A", "Talk")]),
        day("Sun 25 May", &[event("104", "Sun 25 May", "8:30pm", "Garden Stage", "Music")]),
    ])
}

fn s(x: &str) -> String {
    x.to_string()
}
