use crate::markup::{
    Container, ContentBlock, Heading, ItemList, Main, Renderable, SubHeading, TextBlock,
};
use crate::metadata::PageMetadata;
use crate::pages::StaticPage;

/// The backend stack, in display order.
pub const TECHNOLOGIES: [&str; 9] = [
    "Python 3.9.7",
    "Django 3.2.3",
    "Django REST Framework 3.12.4",
    "Djoser 2.1.0",
    "Gunicorn 20.1.0",
    "Psycopg2-binary 2.9.3",
    "Webcolors 1.11.1",
    "Pillow 9.0.0",
    "PyYAML 6.0",
];

/// "Technologies": the static page listing the project's backend stack.
pub struct Technologies;

impl StaticPage for Technologies {
    fn slug(&self) -> &'static str {
        "technologies"
    }

    fn metadata(&self) -> PageMetadata {
        PageMetadata::new(
            "About the project",
            "Foodgram - Technologies",
            "About the project",
        )
    }

    fn body(&self) -> Box<dyn Renderable> {
        Box::new(
            Main::new().with(
                Container::new().with(Heading::new("Technologies")).with(
                    ContentBlock::new()
                        .with(SubHeading::new("Technologies used in this project:"))
                        .with(TextBlock::new().with(ItemList::new(TECHNOLOGIES))),
                ),
            ),
        )
    }
}

#[cfg(test)]
mod test {
    use crate::pages::technologies::{Technologies, TECHNOLOGIES};
    use crate::pages::StaticPage;
    use crate::style::StyleRegistry;

    #[test]
    fn metadata_literals() {
        let metadata = Technologies.metadata();

        assert_eq!(metadata.title, "About the project");
        assert_eq!(metadata.description, "Foodgram - Technologies");
        assert_eq!(metadata.og_title, "About the project");
    }

    #[test]
    fn body_has_headings() {
        let body = Technologies.body().render(&StyleRegistry::default());

        assert!(body.contains("<h1 class=\"title\">Technologies</h1>"));
        assert!(body.contains("<h2 class=\"subtitle\">Technologies used in this project:</h2>"));
    }

    #[test]
    fn body_lists_all_nine_entries_in_order() {
        let body = Technologies.body().render(&StyleRegistry::default());

        assert_eq!(body.matches("<li ").count(), 9);

        let expected: String = TECHNOLOGIES
            .iter()
            .map(|entry| format!("<li class=\"text-item\">{entry}</li>"))
            .collect();
        assert!(body.contains(&format!("<ul class=\"text-item\">{expected}</ul>")));
    }

    #[test]
    fn rendering_is_idempotent() {
        let styles = StyleRegistry::default();

        assert_eq!(
            Technologies.body().render(&styles),
            Technologies.body().render(&styles)
        )
    }

    // The head block and the content block are separate constants; the
    // description never leaks into the body and the list never leaks
    // into the head fields.
    #[test]
    fn metadata_and_body_are_independent() {
        let metadata = Technologies.metadata();
        let body = Technologies.body().render(&StyleRegistry::default());

        assert!(!body.contains(&metadata.description));
        for entry in TECHNOLOGIES {
            assert!(!metadata.title.contains(entry));
            assert!(!metadata.description.contains(entry));
        }
    }
}
