//! Text rendering of guide documents and guide listings.

use crate::domains::guides::{AvailableGuide, GuideCategory, GuideDocument};

/// Render a guide as markdown: title, content, then one `##` block per section.
pub fn render_guide(guide: &GuideDocument) -> String {
    let mut text = format!("# {}\n\n{}", guide.title, guide.content);
    for section in guide.sections.iter().flatten() {
        text.push_str(&format!("\n\n## {}\n\n{}", section.title, section.content));
    }
    text
}

/// Render the guide catalog grouped by category.
///
/// Categories appear in first-seen order; guides keep their order within a
/// category.
pub fn render_guide_list(guides: &[AvailableGuide]) -> String {
    let mut groups: Vec<(GuideCategory, Vec<&AvailableGuide>)> = Vec::new();
    for guide in guides {
        match groups.iter_mut().find(|(category, _)| *category == guide.category) {
            Some((_, entries)) => entries.push(guide),
            None => groups.push((guide.category, vec![guide])),
        }
    }

    let mut text = String::from("Available Guides:\n\n");
    for (category, entries) in groups {
        text.push_str(&format!("**{}:**\n", capitalize(category.as_str())));
        for guide in entries {
            text.push_str(&format!("- {}: {}\n", guide.topic, guide.description));
        }
        text.push('\n');
    }
    text
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
