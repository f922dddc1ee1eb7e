// src/specs/programme.rs
//
// Where things live in the listing markup. One event:
//
//   <div class="productItem">
//     <a name="product-id-<id>-<slug>"> ...
//     <div class="product_details_inner">
//       <div class="programme-page--date">Fri 23 May</div>
//       <div class="programme-page--time">4:15pm</div>
//       <div>Venue: <name></div>
//       <div class="sessiontype">Debate</div>
//     </div>
//     <div class="ht-fpe--event-ticket-wrapper"> … </div>
//   </div>
//
// Day blocks are introduced by `<h2 class="htlgi-heading__small--text">`.

use crate::core::Selector;

// Events
pub const EVENT: Selector<'static> = Selector::tag_class("div", "productItem");
pub const EVENT_ANCHOR: Selector<'static> = Selector::tag("a");
pub const ANCHOR_NAME_ATTR: &str = "name";
pub const PRODUCT_ID_PREFIX: &str = "product-id";
/// `product-id-<id>-…` split on '-'.
pub const PRODUCT_ID_FIELD: usize = 2;

pub const DETAILS: Selector<'static> = Selector::class("product_details_inner");
pub const DETAIL_DIV: Selector<'static> = Selector::tag("div");
/// Zero-based position of the venue line among the details' `div`s.
pub const VENUE_DIV_INDEX: usize = 2;
pub const VENUE_LABEL: &str = "Venue:";
pub const VENUE_PREFIX: &str = "Venue: ";
pub const VENUE_CLASS: &str = "venue";

pub const DATE: Selector<'static> = Selector::class("programme-page--date");
pub const TIME: Selector<'static> = Selector::class("programme-page--time");
/// "Fri 23 May 4:15pm 2025"
pub const WHEN_FORMAT: &str = "%a %d %b %I:%M%p %Y";
pub const TIMESTAMP_ATTR: &str = "timestamp";

pub const SEPARATOR_TAG: &str = "hr";
pub const SEPARATOR: Selector<'static> = Selector::tag("hr");
pub const SESSION_TYPE: Selector<'static> = Selector::class("sessiontype");

// Links and assets
pub const LINK: Selector<'static> = Selector::tag("a");
pub const IMAGE: Selector<'static> = Selector::tag("img");
pub const NEW_TAB: (&str, &str) = ("target", "_blank");
/// Values starting with one of these are left as they are.
pub const ABSOLUTE_PREFIXES: &[&str] = &["http://", "https://", "//", "mailto:", "tel:", "data:"];

// Ticketing affordances
pub const TICKET_WRAPPER: Selector<'static> = Selector::class("ht-fpe--event-ticket-wrapper");
pub const FAST_PASS_HEADER: Selector<'static> = Selector::class("ht-fpe--fast-pass-header");
pub const FESTIVAL_TICKET: Selector<'static> = Selector::class("ht-fpe--festival-ticket");

// Navigation
pub const DAY_HEADING: Selector<'static> = Selector::tag_class("h2", "htlgi-heading__small--text");
pub const ANY_DIV: Selector<'static> = Selector::tag("div");
