use scraper::{Html, Selector};

pub const REALTIME_MISSING: &str = "Realtime container data not found";
pub const PREDICTION_MISSING: &str = "Prediction container data not found";

/// Text content of `div#realtime-container`, or a sentinel when the element
/// is absent. Whitespace is kept as-is so line structure survives for the
/// parser.
pub fn realtime_container_text(html: &str) -> String {
    element_text(html, "div#realtime-container").unwrap_or_else(|| REALTIME_MISSING.to_string())
}

/// Text content of `div#prediction-container`, or a sentinel when absent.
pub fn prediction_container_text(html: &str) -> String {
    element_text(html, "div#prediction-container")
        .unwrap_or_else(|| PREDICTION_MISSING.to_string())
}

/// Stripped text of every `div.category-box` under `div.realtime-boxes`, in
/// document order.
pub fn category_box_texts(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let Ok(sel) = Selector::parse("div.realtime-boxes div.category-box") else {
        return Vec::new();
    };
    doc.select(&sel)
        .map(|node| node.text().map(str::trim).collect::<String>())
        .collect()
}

fn element_text(html: &str, selector: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse(selector).ok()?;
    doc.select(&sel)
        .next()
        .map(|node| node.text().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMBED_HTML: &str = r#"
        <div id="realtime-container">People: 42
Percentage: (56 %)</div>
        <div id="prediction-container">Busy after 17:00</div>
    "#;

    #[test]
    fn test_realtime_container_text() {
        let text = realtime_container_text(EMBED_HTML);
        assert!(text.contains("People: 42"));
        assert!(text.contains("Percentage: (56 %)"));
    }

    #[test]
    fn test_prediction_container_text() {
        assert_eq!(prediction_container_text(EMBED_HTML), "Busy after 17:00");
    }

    #[test]
    fn test_missing_containers_yield_sentinels() {
        let html = "<div>nothing here</div>";
        assert_eq!(realtime_container_text(html), REALTIME_MISSING);
        assert_eq!(prediction_container_text(html), PREDICTION_MISSING);
    }

    #[test]
    fn test_category_box_texts() {
        let html = r#"
            <div class="realtime-boxes">
                <div class="category-box"> Gym <b>42</b> </div>
                <div class="category-box">Pool 7</div>
            </div>
            <div class="category-box">outside, ignored</div>
        "#;
        assert_eq!(category_box_texts(html), vec!["Gym42", "Pool 7"]);
    }

    #[test]
    fn test_no_realtime_boxes() {
        assert!(category_box_texts("<p>plain page</p>").is_empty());
    }
}
