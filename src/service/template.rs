//! Notification message templates.
//!
//! Templates are plain text with `{{placeholder}}` markers. Unknown placeholders are left
//! untouched, and substituted values are never re-scanned, so a video title containing
//! `{{video_url}}` is posted literally.

/// Values available to a message template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateVars<'a> {
    pub video_title: &'a str,
    pub video_url: &'a str,
    pub channel_name: &'a str,
    pub channel_url: &'a str,
}

impl<'a> TemplateVars<'a> {
    fn lookup(&self, name: &str) -> Option<&'a str> {
        match name {
            "video_title" => Some(self.video_title),
            "video_url" => Some(self.video_url),
            "channel_name" => Some(self.channel_name),
            "channel_url" => Some(self.channel_url),
            _ => None,
        }
    }
}

/// Renders a template by substituting every known `{{placeholder}}`.
///
/// # Arguments
/// - `template` - Template text
/// - `vars` - Substitution values
///
/// # Returns
/// - `String` - Rendered message
pub fn render(template: &str, vars: &TemplateVars<'_>) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        rendered.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let substitution = after
            .find("}}")
            .and_then(|end| vars.lookup(&after[..end]).map(|value| (end, value)));

        match substitution {
            Some((end, value)) => {
                rendered.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                // the second brace may open a placeholder, as in `{{{video_title}}}`
                rendered.push('{');
                rest = &rest[start + 1..];
            }
        }
    }

    rendered.push_str(rest);
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> TemplateVars<'static> {
        TemplateVars {
            video_title: "Ep1",
            video_url: "https://x/y",
            channel_name: "Chan",
            channel_url: "https://youtube.com/channel/UC1",
        }
    }

    #[test]
    fn renders_title_and_url() {
        assert_eq!(
            render("{{video_title}} {{video_url}}", &vars()),
            "Ep1 https://x/y"
        );
    }

    #[test]
    fn renders_every_placeholder_repeatedly() {
        assert_eq!(
            render(
                "{{channel_name}} ({{channel_url}}): {{video_title}} / {{video_title}}",
                &vars()
            ),
            "Chan (https://youtube.com/channel/UC1): Ep1 / Ep1"
        );
    }

    #[test]
    fn keeps_unknown_and_unclosed_placeholders() {
        assert_eq!(
            render("{{unknown}} {{video_title}} {{", &vars()),
            "{{unknown}} Ep1 {{"
        );
    }

    #[test]
    fn renders_placeholder_after_extra_brace() {
        assert_eq!(render("{{{video_title}}}", &vars()), "{Ep1}");
        assert_eq!(render("{{{{video_url}}", &vars()), "{{https://x/y");
    }

    #[test]
    fn does_not_rescan_substituted_values() {
        let vars = TemplateVars {
            video_title: "{{video_url}}",
            ..vars()
        };

        assert_eq!(render("{{video_title}}", &vars), "{{video_url}}");
    }

    #[test]
    fn renders_text_without_placeholders() {
        assert_eq!(render("New upload!", &vars()), "New upload!");
    }
}
