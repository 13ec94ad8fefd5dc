//! Output formatting utilities

/// Format the home page title listing for display
pub fn format_title_list(titles: &[String]) -> String {
    if titles.is_empty() {
        return "No entries found\n".to_string();
    }

    let mut output = String::new();
    for title in titles {
        output.push_str(title);
        output.push('\n');
    }
    output
}

/// Format search results for display
pub fn format_search_results(query: &str, titles: &[String]) -> String {
    if titles.is_empty() {
        return format!("No entries matching \"{}\"\n", query);
    }

    let mut output = String::new();
    for title in titles {
        output.push_str(title);
        output.push('\n');
    }
    output
}
