//! Rendering of remote configurations as Android string resources (`ids.xml`).

use crate::models::remote::RemoteItem;

pub const APP_ID_KEY: &str = "app_id";

/// Lowercases the name and turns every whitespace character into `_`.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

pub fn resource_key(prefix: &str, name: &str) -> String {
    format!("{}_{}", prefix, slugify(name))
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render_string_element(key: &str, value: &str) -> String {
    format!("<string name=\"{}\">{}</string>", escape(key), escape(value))
}

pub fn render_app_id(application_id: &str) -> String {
    render_string_element(APP_ID_KEY, application_id)
}

/// One `<string>` element per item, each followed by a newline, in input order.
pub fn render_resources_xml(items: &[RemoteItem], prefix: &str) -> String {
    let mut xml = String::new();
    for item in items {
        let key = resource_key(prefix, item.name().unwrap_or_default());
        xml.push_str(&render_string_element(&key, &item.id));
        xml.push('\n');
    }
    xml
}

/// Wraps a rendered fragment into a standalone resources document.
pub fn wrap_resources(fragment: &str) -> String {
    let mut document = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n");
    for line in fragment.lines() {
        if line.is_empty() {
            document.push('\n');
        } else {
            document.push_str("    ");
            document.push_str(line);
            document.push('\n');
        }
    }
    document.push_str("</resources>\n");
    document
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_slugified_key() {
        let xml = render_resources_xml(&[RemoteItem::new("123", "Really Bored")], "achievement");
        assert_eq!(xml, "<string name=\"achievement_really_bored\">123</string>\n");
    }

    #[test]
    fn empty_items_render_nothing() {
        assert_eq!(render_resources_xml(&[], "achievement"), "");
    }

    #[test]
    fn keeps_input_order() {
        let items = vec![RemoteItem::new("2", "Hard"), RemoteItem::new("1", "Easy")];
        let xml = render_resources_xml(&items, "leaderboard");
        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(
            lines,
            vec![
                "<string name=\"leaderboard_hard\">2</string>",
                "<string name=\"leaderboard_easy\">1</string>",
            ]
        );
    }

    #[test]
    fn each_whitespace_character_becomes_underscore() {
        assert_eq!(slugify("Really  Bored\tNow"), "really__bored_now");
    }

    #[test]
    fn escapes_markup_in_key_and_value() {
        let xml = render_resources_xml(&[RemoteItem::new("a<b", "Cats & \"Dogs\"")], "achievement");
        assert_eq!(
            xml,
            "<string name=\"achievement_cats_&amp;_&quot;dogs&quot;\">a&lt;b</string>\n"
        );
    }

    #[test]
    fn wraps_fragment_in_resources_document() {
        let fragment = format!("{}\n\n{}", render_app_id("42"), "<string name=\"achievement_prime\">1</string>\n");
        let document = wrap_resources(&fragment);
        assert!(document.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n"));
        assert!(document.contains("    <string name=\"app_id\">42</string>\n\n"));
        assert!(document.ends_with("    <string name=\"achievement_prime\">1</string>\n</resources>\n"));
    }
}
