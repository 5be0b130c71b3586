//! HTML table dump of decoded fields, for diagnostic pages.

use crate::path_info::PathInfo;
use html_escape::encode_text;

/// Render one `<tr>` per value, names and values HTML-escaped.
pub fn render(params: &PathInfo) -> String {
    let mut html = String::from("<table>\n");
    for (name, values) in params.iter() {
        let name = encode_text(name);
        for value in values {
            html.push_str("<tr><td>");
            html.push_str(&name);
            html.push_str("</td><td>");
            html.push_str(&encode_text(value));
            html.push_str("</td></tr>\n");
        }
    }
    html.push_str("</table>\n");
    html
}

impl PathInfo {
    /// See [`render`].
    pub fn to_html_table(&self) -> String {
        render(self)
    }
}
