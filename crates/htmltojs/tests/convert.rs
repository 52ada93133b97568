use std::io;

use pretty_assertions::assert_eq;

use htmltojs::{Filter, HtmlToJs, HtmlToJsError};

#[test]
fn test_parse_reference_document() {
    let mut h = HtmlToJs::new();

    let s = "
<div id=\"content\">
content text node 1
<ul style=\"list-style-type: none;\">
\t<li class=\"list\">foo</li>
\t<li class=\"list\">bar</li>
\t<li class=\"list\">baz</li>
</ul>
content text node 2
</div>
<script>
(function () {
\tconsole.log('hello world');
})();
</script>
";

    h.parse(s.as_bytes()).unwrap();

    let expected = "var _a = document.createElement(\"div\");
_a.id = \"content\";
document.body.appendChild(_a);
var _b = document.createTextNode(\"content text node 1\");
_a.appendChild(_b);
var _c = document.createElement(\"ul\");
_c.style.listStyleType = \"none\";
_a.appendChild(_c);
var _d = document.createElement(\"li\");
_d.className = \"list\";
_c.appendChild(_d);
var _e = document.createTextNode(\"foo\");
_d.appendChild(_e);
var _f = document.createElement(\"li\");
_f.className = \"list\";
_c.appendChild(_f);
var _g = document.createTextNode(\"bar\");
_f.appendChild(_g);
var _h = document.createElement(\"li\");
_h.className = \"list\";
_c.appendChild(_h);
var _i = document.createTextNode(\"baz\");
_h.appendChild(_i);
var _j = document.createTextNode(\"content text node 2\");
_a.appendChild(_j);
(function () {
\tconsole.log('hello world');
})();
";
    assert_eq!(h.as_str(), expected);
}

#[test]
fn test_parse_compact_document() {
    let mut h = HtmlToJs::new();
    h.parse_str(
        "<div id=\"content\">content text node 1<ul style=\"list-style-type: none;\"><li class=\"list\">foo</li></ul></div>\n<script>console.log(1);</script>",
    );

    let expected = r#"var _a = document.createElement("div");
_a.id = "content";
document.body.appendChild(_a);
var _b = document.createTextNode("content text node 1");
_a.appendChild(_b);
var _c = document.createElement("ul");
_c.style.listStyleType = "none";
_a.appendChild(_c);
var _d = document.createElement("li");
_d.className = "list";
_c.appendChild(_d);
var _e = document.createTextNode("foo");
_d.appendChild(_e);
console.log(1);
"#;
    assert_eq!(h.to_string(), expected);
}

#[test]
fn test_head_children_are_never_emitted() {
    let mut h = HtmlToJs::new();
    h.filters_mut().excludes.del(&"head".into());
    h.include("title").include("head");
    h.parse_str("<html><head><title>Title</title></head><body><p>x</p></body></html>");

    assert_eq!(
        h.as_str(),
        "var _a = document.createElement(\"head\");\ndocument.body.appendChild(_a);\n"
    );
}

#[test]
fn test_includes_are_an_exhaustive_allow_list() {
    let mut h = HtmlToJs::new();
    h.include("li");
    h.parse_str("<ul><li>one</li><li><span>two</span></li></ul><p>three</p>");

    let expected = r#"var _a = document.createElement("li");
document.body.appendChild(_a);
var _b = document.createTextNode("one");
_a.appendChild(_b);
var _c = document.createElement("li");
document.body.appendChild(_c);
var _d = document.createTextNode("two");
_c.appendChild(_d);
"#;
    assert_eq!(h.as_str(), expected);
}

#[test]
fn test_attribute_translation_end_to_end() {
    let mut h = HtmlToJs::new();
    h.parse_str(
        r#"<button type="submit" data-user-id="7" onclick="go();" class="btn primary" style="color: red" disabled>Go</button>"#,
    );

    let expected = r#"var _a = document.createElement("button");
_a.type = "submit";
_a.dataset.userId = "7";
_a.addEventListener("click", function() {go();}, false);
_a.className = "btn primary";
_a.style.color = "red";
_a.disabled = true;
document.body.appendChild(_a);
var _b = document.createTextNode("Go");
_a.appendChild(_b);
"#;
    assert_eq!(h.as_str(), expected);
}

#[test]
fn test_custom_default_parent() {
    let mut h = HtmlToJs::new();
    h.set_default_parent("document.documentElement");
    h.parse_str("<hr>");
    assert_eq!(
        h.as_str(),
        "var _a = document.createElement(\"hr\");\ndocument.documentElement.appendChild(_a);\n"
    );
}

#[test]
fn test_non_breaking_space_survives() {
    let mut h = HtmlToJs::new();
    h.parse_str("<p title=\"a&nbsp;b\">a&nbsp;&nbsp;b</p>");

    let expected = "var _a = document.createElement(\"p\");
_a.title = \"a\u{a0}b\";
document.body.appendChild(_a);
var _b = document.createTextNode(\"a\u{a0}\u{a0}b\");
_a.appendChild(_b);
";
    assert_eq!(h.as_str(), expected);
}

#[test]
fn test_deeply_nested_html() {
    let depth = 20_000;
    let mut h = HtmlToJs::new();
    h.parse_str(&format!("{}x{}", "<div>".repeat(depth), "</div>".repeat(depth)));

    let out = h.as_str();
    assert_eq!(out.matches("document.createElement(\"div\")").count(), depth);
    assert!(out.starts_with("var _a = document.createElement(\"div\");\ndocument.body.appendChild(_a);\n"));
    assert!(out.ends_with("var _acog = document.createTextNode(\"x\");\n_acof.appendChild(_acog);\n"));
}

struct FailingReader;

impl io::Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
    }
}

#[test]
fn test_read_failure_leaves_buffer_untouched() {
    let mut h = HtmlToJs::new();
    h.parse_str("<p>kept</p>");
    let before = h.as_str().to_string();

    let err = h.parse(FailingReader).unwrap_err();
    assert!(matches!(err, HtmlToJsError::Parse(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    assert_eq!(h.as_str(), before);
}
