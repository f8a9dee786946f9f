//! Preview Assembly - One Self-Contained Document
//!
//! Inlines the rendered stylesheet and script so the result can be
//! dropped straight into an iframe srcdoc. Image URLs stay live; no
//! asset is fetched here.

use crate::render::RenderedAssets;

const STYLESHEET_LINK: &str = "<link rel=\"stylesheet\" href=\"style.css\">";
const SCRIPT_TAG: &str = "<script src=\"script.js\"></script>";

/// Assemble the single-document preview for a rendered site.
///
/// The template's `style.css` link and `script.js` tag are swapped for
/// inline blocks. Templates lacking those tags get the blocks injected
/// before `</head>` and `</body>`; failing even that, prepended and
/// appended. Pure: identical assets produce identical documents.
pub fn preview_document(assets: &RenderedAssets) -> String {
    let style_block = format!("<style>\n{}\n</style>", assets.css);
    let script_block = format!("<script>\n{}\n</script>", assets.js);

    let document = inline(&assets.html, STYLESHEET_LINK, "</head>", &style_block, false);
    inline(&document, SCRIPT_TAG, "</body>", &script_block, true)
}

fn inline(document: &str, tag: &str, anchor: &str, block: &str, append: bool) -> String {
    if document.contains(tag) {
        return document.replacen(tag, block, 1);
    }
    if let Some(index) = document.find(anchor) {
        let mut out = String::with_capacity(document.len() + block.len() + 1);
        out.push_str(&document[..index]);
        out.push_str(block);
        out.push('\n');
        out.push_str(&document[index..]);
        return out;
    }
    if append {
        format!("{}\n{}", document, block)
    } else {
        format!("{}\n{}", block, document)
    }
}
