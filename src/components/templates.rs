use std::fs;
use std::path::PathBuf;
use log::{debug, error};
use crate::errors::WikiError;
use crate::types::ViewModel;
use crate::utils::{encode_path_segment, escape_attr, escape_html};

const SECTION_OPEN: &str = "{{#Titles}}";
const SECTION_CLOSE: &str = "{{/Titles}}";

type Bindings = Vec<(&'static str, String)>;

/// Component for rendering view models through `<name>.html` templates
///
/// Templates use `{{Title}}`, `{{TitlePath}}` and `{{Body}}` placeholders. A
/// `{{#Titles}} ... {{/Titles}}` section is repeated once per listed title with
/// `{{Title}}` and `{{TitlePath}}` bound to that title. Every bound value is
/// HTML-escaped; unknown placeholders are left untouched.
#[derive(Clone)]
pub struct TemplateComponent {
    template_dir: PathBuf,
}

impl TemplateComponent {
    /// Create a new template component reading from `template_dir`
    pub fn new(template_dir: PathBuf) -> Self {
        Self { template_dir }
    }

    /// Render `model` through the template its variant selects
    pub fn render(&self, model: &ViewModel) -> Result<String, WikiError> {
        let name = model.template_name();
        let path = self.template_dir.join(format!("{}.html", name));
        debug!("Rendering template {:?}", path);

        let template = fs::read_to_string(&path).map_err(|e| {
            error!("Failed to load template {:?}: {}", path, e);
            WikiError::TemplateError(format!("{}: {}", path.display(), e))
        })?;

        let bindings = match model {
            ViewModel::View(page) | ViewModel::Edit(page) => {
                let mut bindings = title_bindings(&page.title);
                bindings.push(("Body", escape_html(&page.body_text())));
                bindings
            }
            ViewModel::List(_) => Vec::new(),
        };
        let titles: &[String] = match model {
            ViewModel::List(list) => &list.titles,
            _ => &[],
        };

        render_template(&template, &bindings, titles).map_err(|e| {
            error!("Failed to render template {:?}: {:?}", path, e);
            e
        })
    }
}

fn title_bindings(title: &str) -> Bindings {
    vec![
        ("Title", escape_html(title)),
        ("TitlePath", escape_attr(&encode_path_segment(title))),
    ]
}

/// Expand the titles section and fill placeholders in a single pass
fn render_template(
    template: &str,
    bindings: &Bindings,
    titles: &[String],
) -> Result<String, WikiError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(SECTION_OPEN) {
        let before = &rest[..start];
        if before.contains(SECTION_CLOSE) {
            return Err(WikiError::TemplateError(format!("unexpected {}", SECTION_CLOSE)));
        }
        out.push_str(&fill_placeholders(before, bindings));

        let after_open = &rest[start + SECTION_OPEN.len()..];
        let end = after_open.find(SECTION_CLOSE).ok_or_else(|| {
            WikiError::TemplateError(format!("unterminated {}", SECTION_OPEN))
        })?;
        let inner = &after_open[..end];
        if inner.contains(SECTION_OPEN) {
            return Err(WikiError::TemplateError(format!("nested {}", SECTION_OPEN)));
        }
        for title in titles {
            out.push_str(&fill_placeholders(inner, &title_bindings(title)));
        }
        rest = &after_open[end + SECTION_CLOSE.len()..];
    }

    if rest.contains(SECTION_CLOSE) {
        return Err(WikiError::TemplateError(format!("unexpected {}", SECTION_CLOSE)));
    }
    out.push_str(&fill_placeholders(rest, bindings));
    Ok(out)
}

fn fill_placeholders(text: &str, bindings: &Bindings) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = &after[..end];
        match bindings.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_known_placeholders_once() {
        let bindings = vec![("Title", "A".to_string()), ("Body", "{{Title}}".to_string())];
        assert_eq!(
            fill_placeholders("<h1>{{Title}}</h1><p>{{Body}}</p>{{Other}}", &bindings),
            "<h1>A</h1><p>{{Title}}</p>{{Other}}"
        );
    }

    #[test]
    fn repeats_section_per_title() {
        let titles = vec!["A".to_string(), "B c".to_string()];
        let out = render_template(
            "<ul>{{#Titles}}<li><a href=\"/view/{{TitlePath}}\">{{Title}}</a></li>{{/Titles}}</ul>",
            &Vec::new(),
            &titles,
        )
        .unwrap();
        assert_eq!(
            out,
            "<ul><li><a href=\"/view/A\">A</a></li><li><a href=\"/view/B%20c\">B c</a></li></ul>"
        );
    }

    #[test]
    fn rejects_unbalanced_sections() {
        assert!(matches!(
            render_template("{{#Titles}}<li>", &Vec::new(), &[]),
            Err(WikiError::TemplateError(_))
        ));
        assert!(matches!(
            render_template("<li>{{/Titles}}", &Vec::new(), &[]),
            Err(WikiError::TemplateError(_))
        ));
    }
}
