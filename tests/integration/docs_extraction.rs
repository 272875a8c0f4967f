use docbot::docs::{find_description, get_attr_docstr};
use docbot::ExtractError;

use crate::support::RE_PAGE;

#[test]
fn extracts_summary_paragraph_from_reference_page() {
    assert_eq!(
        get_attr_docstr(RE_PAGE, "re", "compile"),
        "Compile a regular expression pattern into a regular expression object, \
         which can be used for matching using its match(), search() and other methods, \
         described below."
    );
}

#[test]
fn stripped_entities_leave_no_gap() {
    assert_eq!(
        get_attr_docstr(RE_PAGE, "re", "escape"),
        "Escape special characters inpattern."
    );
}

#[test]
fn definition_without_paragraph_falls_back() {
    assert!(matches!(
        find_description(RE_PAGE, "re", "A"),
        Err(ExtractError::StructureMismatch { .. })
    ));
    assert_eq!(get_attr_docstr(RE_PAGE, "re", "A"), "Docs not found for re.A");
}

#[test]
fn unknown_attribute_falls_back() {
    assert_eq!(
        get_attr_docstr(RE_PAGE, "re", "fullmatchx"),
        "Docs not found for re.fullmatchx"
    );
}

#[test]
fn anchor_uses_full_module_path() {
    let html = r#"<html xmlns="http://www.w3.org/1999/xhtml"><body>
<dl><dt id="os.path.join">os.path.join(path, *paths)</dt>
<dd><p>Join one or more path segments <em>intelligently</em>.</p></dd></dl>
</body></html>"#;
    assert_eq!(
        get_attr_docstr(html, "os.path", "join"),
        "Join one or more path segments intelligently."
    );
    assert_eq!(get_attr_docstr(html, "os", "join"), "Docs not found for os.join");
}

#[test]
fn html5_page_is_a_parse_failure() {
    let html = "<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head><body></body></html>";
    assert!(matches!(
        find_description(html, "re", "compile"),
        Err(ExtractError::Parse(_))
    ));
}
