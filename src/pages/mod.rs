pub mod technologies;

use crate::markup::Renderable;
use crate::metadata::PageMetadata;

/// A compiled-in informational page: fixed metadata and a fixed body
/// tree, produced from no input.
pub trait StaticPage {
    /// Path segment the page is written under.
    fn slug(&self) -> &'static str;

    fn metadata(&self) -> PageMetadata;

    fn body(&self) -> Box<dyn Renderable>;
}

/// Every page the site publishes.
pub fn all() -> Vec<Box<dyn StaticPage>> {
    vec![Box::new(technologies::Technologies)]
}

#[cfg(test)]
mod test {
    use crate::pages;

    #[test]
    fn slugs_are_unique() {
        let mut slugs: Vec<&str> = pages::all().iter().map(|page| page.slug()).collect();
        let total = slugs.len();

        slugs.sort();
        slugs.dedup();

        assert_eq!(slugs.len(), total)
    }
}
