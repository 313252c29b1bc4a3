use scraper::{ElementRef, Html, Selector};

/// Finds the first element matched by `css_selector` whose `attr` equals `value` exactly.
///
/// The value is compared in Rust rather than spliced into the selector, so it
/// may contain quotes or brackets. An invalid `css_selector` yields `None`,
/// the same as an element that is not on the page.
///
/// # Examples
///
/// ```
/// let html = r#"<table><tr data-slug="eur" data-price="1"></tr></table>"#;
/// let document = Html::parse_document(html);
/// let row = find_by_attr(&document, "tr[data-slug]", "data-slug", "eur");
/// assert!(row.is_some());
/// ```
pub fn find_by_attr<'a>(
    document: &'a Html,
    css_selector: &str,
    attr: &str,
    value: &str,
) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css_selector).ok()?;
    document
        .select(&selector)
        .find(|element| element.value().attr(attr) == Some(value))
}

/// Returns the attribute `name` of `element`, or `None` when it is absent.
pub fn attr_value(element: &ElementRef, name: &str) -> Option<String> {
    element.value().attr(name).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTML: &str = r#"
        <table>
            <tr data-market-nameslug="price_eur" data-price="1,000"><td>EUR</td></tr>
            <tr data-market-nameslug="price_eur" data-price="2,000"><td>EUR again</td></tr>
            <tr data-market-nameslug="it's"><td>quoted</td></tr>
        </table>"#;

    #[test]
    fn test_find_by_attr_returns_first_match() {
        let document = Html::parse_document(HTML);
        let row = find_by_attr(
            &document,
            "tr[data-market-nameslug]",
            "data-market-nameslug",
            "price_eur",
        )
        .unwrap();

        assert_eq!(attr_value(&row, "data-price").as_deref(), Some("1,000"));
    }

    #[test]
    fn test_find_by_attr_value_with_quote() {
        let document = Html::parse_document(HTML);
        let row = find_by_attr(
            &document,
            "tr[data-market-nameslug]",
            "data-market-nameslug",
            "it's",
        )
        .unwrap();

        assert_eq!(attr_value(&row, "data-price"), None);
    }

    #[test]
    fn test_find_by_attr_missing_and_bad_selector() {
        let document = Html::parse_document(HTML);
        assert!(find_by_attr(&document, "tr[data-market-nameslug]", "data-market-nameslug", "sekee").is_none());
        assert!(find_by_attr(&document, "tr[[", "data-market-nameslug", "price_eur").is_none());
    }
}
