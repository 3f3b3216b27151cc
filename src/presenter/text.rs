use std::fmt::Write;

use super::{HomeScreen, MapView, MarkerKind, StatusNotice, TabContent, WelcomeScreen};

pub fn render_welcome_text(screen: &WelcomeScreen) -> String {
    format!(
        "{}\n{}\n\n{}\n\n[ {} ]\n",
        screen.app_name, screen.tagline, screen.description, screen.start_label
    )
}

/// Plain-text rendering of the home screen, used by the `render` command.
pub fn render_text(screen: &HomeScreen) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_screen(&mut out, screen);
    out
}

fn write_screen(out: &mut String, screen: &HomeScreen) -> std::fmt::Result {
    writeln!(out, "{}", screen.title)?;
    let tabs: Vec<String> = screen
        .tabs
        .iter()
        .map(|t| {
            if t.active {
                format!("[{}]", t.label)
            } else {
                format!(" {} ", t.label)
            }
        })
        .collect();
    writeln!(out, "{}", tabs.join(" "))?;

    match &screen.notice {
        Some(StatusNotice::Locating) => writeln!(out, "(locating...)")?,
        Some(StatusNotice::LocationUnavailable { message, .. }) => writeln!(out, "! {}", message)?,
        None => {}
    }
    writeln!(out)?;

    match &screen.content {
        TabContent::Listing { map, items, .. } => {
            write_map(out, map)?;
            for item in items {
                writeln!(out)?;
                writeln!(out, "{}  Safety: {}/5 ✨", item.name, item.safety_rating)?;
                writeln!(out, "  {}", item.category)?;
                writeln!(out, "  {}", item.address)?;
                for feature in &item.features {
                    writeln!(out, "  💗 {}", feature)?;
                }
            }
        }
        TabContent::Safety { tips, resources } => {
            writeln!(out, "💝 Safety Tips 💝")?;
            for tip in tips {
                writeln!(out, "{} {}", tip.icon, tip.title)?;
                writeln!(out, "  {}", tip.description)?;
            }
            writeln!(out)?;
            writeln!(out, "🆘 Emergency Resources 🆘")?;
            for resource in resources {
                writeln!(
                    out,
                    "{}: {} ({})",
                    resource.name, resource.number, resource.available
                )?;
            }
        }
    }

    if let Some(overlay) = &screen.overlay {
        writeln!(out)?;
        writeln!(out, "--- {} ---", overlay.name)?;
        writeln!(out, "Reviews:")?;
        for review in &overlay.reviews {
            writeln!(out, "  {}", review.text)?;
            writeln!(out, "  Rating: {}/5 ⭐", review.rating)?;
        }
        writeln!(out, "[ Close ]")?;
    }
    Ok(())
}

fn write_map(out: &mut String, map: &MapView) -> std::fmt::Result {
    writeln!(out, "Map centered at {} ({:?})", map.center, map.centered_on)?;
    for marker in &map.markers {
        let pin = match marker.kind {
            MarkerKind::Venue => "📍",
            MarkerKind::User => "🔵",
        };
        match &marker.subtitle {
            Some(subtitle) => writeln!(
                out,
                "  {} {} - {} @ {}",
                pin, marker.title, subtitle, marker.coordinate
            )?,
            None => writeln!(out, "  {} {} @ {}", pin, marker.title, marker.coordinate)?,
        }
    }
    Ok(())
}
