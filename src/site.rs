use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use sitemap_rs::{url::Url, url_set::UrlSet};

use crate::pages::{self, StaticPage};
use crate::style::StyleRegistry;
use crate::template::Shell;

fn writeable(path: &Path) -> anyhow::Result<std::fs::File> {
    use std::fs::{create_dir_all, File};

    let parent = path
        .parent()
        .with_context(|| format!("output path {path:?} has no parent"))?;
    create_dir_all(parent)?;

    Ok(File::create(path)?)
}

/// Assembles the published site: renders every page through the shell
/// and writes the output tree plus a sitemap.
pub struct Site {
    site_url: String,
    shell: Shell,
    styles: StyleRegistry,
}

impl Site {
    pub fn new(site_url: String, shell: Shell, styles: StyleRegistry) -> Self {
        Self {
            site_url,
            shell,
            styles,
        }
    }

    fn page_url(&self, page: &dyn StaticPage) -> String {
        format!("{}/{}/", self.site_url.trim_end_matches('/'), page.slug())
    }

    /// Render every registered page into `dest/<slug>/index.html`, then
    /// write `dest/sitemap.xml`.
    pub fn build(&self, dest: &Path) -> anyhow::Result<()> {
        let pages = pages::all();

        for page in &pages {
            log::info!("Rendering page `{}`", page.slug());

            let body = page.body().render(&self.styles);
            let document = self.shell.render(&page.metadata(), &body)?;

            let out: PathBuf = dest.join(page.slug()).join("index.html");
            writeable(&out)?.write_all(document.as_bytes())?;
        }

        self.write_sitemap(dest, &pages)?;

        Ok(())
    }

    fn write_sitemap(&self, dest: &Path, pages: &[Box<dyn StaticPage>]) -> anyhow::Result<()> {
        let stamp: chrono::DateTime<chrono::FixedOffset> = chrono::Utc::now().into();

        let urls = pages
            .iter()
            .map(|page| {
                Url::builder(self.page_url(page.as_ref()))
                    .last_modified(stamp)
                    .build()
                    .map_err(|err| anyhow::anyhow!("sitemap entry for `{}`: {err}", page.slug()))
            })
            .collect::<anyhow::Result<Vec<Url>>>()?;

        let url_set = UrlSet::new(urls).map_err(|err| anyhow::anyhow!("sitemap: {err}"))?;

        let mut serialized = Vec::new();
        url_set
            .write(&mut serialized)
            .map_err(|err| anyhow::anyhow!("sitemap: {err}"))?;

        writeable(&dest.join("sitemap.xml"))?.write_all(&serialized)?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::site::Site;
    use crate::style::StyleRegistry;
    use crate::template::Shell;

    #[test]
    fn build_writes_pages_and_sitemap() {
        let dest = std::env::temp_dir().join("foodgram-pages-build-test");

        let site = Site::new(
            "http://localhost".into(),
            Shell::new().unwrap(),
            StyleRegistry::default(),
        );
        site.build(&dest).unwrap();

        let html = std::fs::read_to_string(dest.join("technologies").join("index.html")).unwrap();
        assert!(html.contains("<title>About the project</title>"));
        assert!(html.contains("<h1 class=\"title\">Technologies</h1>"));

        let sitemap = std::fs::read_to_string(dest.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("http://localhost/technologies/"));
    }
}
