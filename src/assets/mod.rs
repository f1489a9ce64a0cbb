//! Static asset constants (JavaScript and the placeholder portrait).

use std::path::{Path, PathBuf};

/// JavaScript for button press feedback and scroll-to-top on form submit.
pub const SCRIPT_JS: &str = include_str!("script.js");

/// Placeholder portrait markup.
///
/// Written to a `.png` path even though it is SVG text. Callers that need a
/// raster image should check [`Asset::extension_matches_content`].
pub const PORTRAIT_SVG: &str = include_str!("portrait_placeholder.svg");

/// A bundled file and where it lands under the asset root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    /// Path relative to the asset root, `/`-separated.
    pub relative_path: &'static str,
    /// Media type of the payload itself (not of the path).
    pub media_type: &'static str,
    /// Exact bytes to write.
    pub contents: &'static [u8],
}

impl Asset {
    /// Destination of this asset beneath `root`.
    pub fn destination(&self, root: &Path) -> PathBuf {
        self.relative_path
            .split('/')
            .fold(root.to_path_buf(), |path, part| path.join(part))
    }

    /// Whether the file extension agrees with the payload's media type.
    pub fn extension_matches_content(&self) -> bool {
        mime_guess::from_path(self.relative_path)
            .iter()
            .any(|guess| guess.essence_str() == self.media_type)
    }
}

/// Every asset the forge writes, in write order.
pub const STATIC_ASSETS: &[Asset] = &[
    Asset {
        relative_path: "static/js/script.js",
        media_type: "text/javascript",
        contents: SCRIPT_JS.as_bytes(),
    },
    Asset {
        relative_path: "static/img/portrait_placeholder.png",
        media_type: "image/svg+xml",
        contents: PORTRAIT_SVG.as_bytes(),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_wires_buttons_and_forms() {
        assert!(SCRIPT_JS.starts_with("// Character Forge interactions\n"));
        assert!(SCRIPT_JS.contains(r#"querySelectorAll(".choice-btn")"#));
        assert!(SCRIPT_JS.contains(r#"behavior: "smooth""#));
        assert!(SCRIPT_JS.ends_with("});\n"));
    }

    #[test]
    fn test_portrait_is_bare_svg() {
        assert!(PORTRAIT_SVG.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(PORTRAIT_SVG.ends_with("</svg>"));
        assert!(PORTRAIT_SVG.contains("Replace with race_class art"));
    }

    #[test]
    fn test_destination_joins_components() {
        let root = Path::new("/srv/forge");
        assert_eq!(
            STATIC_ASSETS[0].destination(root),
            PathBuf::from("/srv/forge/static/js/script.js")
        );
        assert_eq!(
            STATIC_ASSETS[1].destination(root),
            PathBuf::from("/srv/forge/static/img/portrait_placeholder.png")
        );
    }

    #[test]
    fn test_portrait_extension_mismatch_is_reported() {
        assert!(STATIC_ASSETS[0].extension_matches_content());
        assert!(!STATIC_ASSETS[1].extension_matches_content());

        let renamed = Asset {
            relative_path: "static/img/portrait_placeholder.svg",
            ..STATIC_ASSETS[1]
        };
        assert!(renamed.extension_matches_content());
    }
}
