// src/pipeline/assemble.rs
// Splice the navigation, filters and the mutated programme into the page shell.
//
// The shell's client-side behaviours rely on three things from the tree:
// `timestamp` (epoch millis) on every `.productItem`, a `.venue` line inside it,
// and `nav-day-<n>` ids on the day headings. `#filterLocation` and
// `#filterSessiontype` are the select ids the behaviours read.

use chrono::DateTime;
use chrono_tz::Tz;
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::core::Document;
use crate::pipeline::navigation::NavigationIndex;

const PAGE_HEAD: &str = include_str!("page_head.html");

pub const LOCATION_SELECT_ID: &str = "filterLocation";
pub const SESSION_TYPE_SELECT_ID: &str = "filterSessiontype";

const BODY_OPEN: &str = r#"
<body _="init
    markPastEvents()
    loadFilters()
    applyFilters()
    handleNextEventJump()
    initQRCode()
    ">

<main>

<div id="qrcodeContainer" _="on click toggle my *display" style="display:none;">
    <div class="wrapper">
        <h2>Share this page</h2>
        <div id="qrcode"></div>
    </div>
</div>

<header>
<div id="warning" _="on click toggle the *display of the .explain in me">
<h3>This is NOT the official HTLGI website. <span style="font-size:10pt; font-style: italic; font-weight:normal;">Click for details and help ...</span></h3>
<div class="explain" style="display:none;">
    <p>
    This is a helper to navigate the programme faster than the official site.
    </p>

    <p>All links open on the official site where you can buy fastpasses and tickets. To avoid confusion those features are disabled here.</p>
"#;

const SHARE_AND_TIME_OPEN: &str = r#"
<div id="share" _="on click toggle the *display of the #qrcodeContainer">
    Share this page ...
</div>

<div class="col">
<label>Time</label>

<ul>
    <li style="margin-bottom: 1em;"><a _="on click updateLocationForNextEvent()">Jump to next event</a></li>
"#;

const BODY_CLOSE: &str = r#"
</main>
</body>
</html>
"#;

/// Render the final page. `updated` is the run time, already in the display zone.
pub fn assemble(doc: &Document, nav: &NavigationIndex, updated: DateTime<Tz>) -> String {
    let programme = doc.to_html();
    let mut page = String::with_capacity(PAGE_HEAD.len() + programme.len() + 8 * 1024);

    page.push_str(PAGE_HEAD);
    page.push_str(BODY_OPEN);
    page.push_str(&join!(
        "\n    <p>Last updated: ",
        &updated.format("%Y-%m-%d %H:%M:%S").to_string(),
        " (",
        updated.timezone().name(),
        ")</p>\n</div>\n</div>\n",
    ));

    page.push_str(SHARE_AND_TIME_OPEN);
    for day in &nav.days {
        page.push_str(&join!(
            "    <li><a href=\"#",
            &encode_double_quoted_attribute(&day.id),
            "\">",
            &encode_text(&day.label),
            "</a></li>\n",
        ));
    }
    page.push_str("</ul>\n</div>\n\n<div class=\"col\">\n\n<form>\n");

    page.push_str(&select_field("filter_location", "Location", LOCATION_SELECT_ID, &nav.venues));
    page.push_str(&select_field(
        "filter_sessiontype",
        "Session Type",
        SESSION_TYPE_SELECT_ID,
        &nav.session_types,
    ));

    page.push_str("</form>\n</div>\n<div style=\"clear:both\"></div>\n</header>\n\n");
    page.push_str(&programme);
    page.push_str(BODY_CLOSE);
    page
}

/// One labelled `<select>`; the first option starts selected.
fn select_field(name: &str, label: &str, id: &str, options: &[String]) -> String {
    let mut out = join!(
        "    <div class=\"field\">\n    <label for=\"",
        name,
        "\">",
        label,
        "</label>\n    <select name=\"",
        name,
        "\" id=\"",
        id,
        "\" _=\"on change updateLocationForFilters()\">\n",
    );
    for (i, option) in options.iter().enumerate() {
        let selected = if i == 0 { " selected" } else { "" };
        out.push_str(&join!(
            "        <option value=\"",
            &encode_double_quoted_attribute(option),
            "\"",
            selected,
            ">",
            &encode_text(option),
            "</option>\n",
        ));
    }
    out.push_str("    </select>\n    </div>\n\n");
    out
}
