use anyhow::Context;
use handlebars::Handlebars;
use serde::Serialize;

use crate::metadata::PostMetadata;

const POST_TEMPLATE: &str = include_str!("../template/post.hbs");

#[derive(Serialize, Debug)]
struct PostPageData<'a> {
    title: &'a str,
    date: String,
    categories: &'a str,
}

pub(crate) fn generate_renderer() -> anyhow::Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    // front matter is not HTML; values go in verbatim
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars
        .register_template_string("post", POST_TEMPLATE)
        .context("post.hbs")?;

    Ok(handlebars)
}

pub(crate) fn render_post(
    handlebars: &Handlebars<'_>,
    metadata: &PostMetadata,
) -> anyhow::Result<String> {
    let data = PostPageData {
        title: &metadata.title,
        date: metadata.front_matter_date(),
        categories: &metadata.categories,
    };
    handlebars
        .render("post", &data)
        .with_context(|| format!("while rendering front matter for {:?}", metadata.title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::parse_date;

    fn render(title: &str, categories: &str) -> String {
        let metadata = PostMetadata {
            title: title.to_string(),
            categories: categories.to_string(),
            date: parse_date("2024-01-15 09:30:00").unwrap(),
        };
        render_post(&generate_renderer().unwrap(), &metadata).unwrap()
    }

    #[test]
    fn renders_full_front_matter() {
        let expected = concat!(
            "---\n",
            "layout: post\n",
            "title: \"Hello, World!\"\n",
            "date: 2024-01-15 09:30:00 +0200\n",
            "categories: rust cli\n",
            "comments: true\n",
            "published: false\n",
            "excerpt: |\n",
            "  \n",
            "image_url: /assets/images/unsplash/PATH.jpg\n",
            "image_description: |\n",
            "  Photo by [NAME](https://unsplash.com/USERNAME?utm_source=unsplash&utm_medium=referral&utm_content=creditCopyText)\n",
            "  on [Unsplash](https://unsplash.com/photos/HASH?utm_source=unsplash&utm_medium=referral&utm_content=creditCopyText)\n",
            "---",
        );
        assert_eq!(render("Hello, World!", "rust cli"), expected);
    }

    #[test]
    fn empty_categories() {
        let content = render("Title", "");
        assert!(content.lines().any(|l| l == "categories: "));
    }

    #[test]
    fn fixed_keys_regardless_of_input() {
        for (title, categories) in [("", ""), ("published: true", "comments: false")] {
            let content = render(title, categories);
            assert!(content.lines().any(|l| l == "published: false"));
            assert!(content.lines().any(|l| l == "comments: true"));
        }
    }

    #[test]
    fn values_are_not_html_escaped() {
        let content = render("Tom & \"Jerry\" <3", "a&b");
        assert!(content.contains("title: \"Tom & \"Jerry\" <3\""));
        assert!(content.contains("categories: a&b\n"));
    }
}
