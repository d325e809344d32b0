use html::{DOM, Namespace};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn parser_builds_html_head_and_body() {
    init_logging();
    let dom = DOM::parse("<p id=intro class='lead  wide'>Hello <b>world</b></p><!-- note -->");
    let html = dom.document_element().unwrap();
    assert_eq!(dom.tag_name(html), Some("html"));
    let tags: Vec<_> = dom
        .element_children(html)
        .into_iter()
        .filter_map(|child| dom.tag_name(child))
        .collect();
    assert_eq!(tags, vec!["head", "body"]);

    let body = dom.body().unwrap();
    let paragraph = dom.element_children(body)[0];
    assert_eq!(dom.id(paragraph), Some("intro"));
    assert_eq!(dom.class_list(paragraph), vec!["lead", "wide"]);
    assert_eq!(dom.text_content(paragraph), "Hello world");
    assert_eq!(dom.parent_element(paragraph), Some(body));
    assert_eq!(dom.parent_element(html), None);
}

#[test]
fn comments_are_dropped_and_whitespace_text_kept() {
    let dom = DOM::parse("<div>\n  <span>a</span><!-- gone -->\n</div>");
    let div = dom.elements_by_tag("div").next().unwrap();
    assert_eq!(dom.children(div).count(), 3);
    assert_eq!(dom.element_children(div).len(), 1);
    assert_eq!(dom.text_content(div), "\n  a\n");
}

#[test]
fn svg_content_keeps_its_namespace_and_case() {
    let dom = DOM::parse(
        r#"<svg viewbox="0 0 10 10"><lineargradient id="g"/><path fill="url(#g)"/></svg>"#,
    );
    let svg = dom.elements_by_tag("svg").next().unwrap();
    assert_eq!(dom.namespace(svg), Some(Namespace::Svg));
    assert_eq!(dom.attribute(svg, "viewBox"), Some("0 0 10 10"));

    let children: Vec<_> = dom
        .element_children(svg)
        .into_iter()
        .filter_map(|child| dom.tag_name(child))
        .collect();
    assert_eq!(children, vec!["linearGradient", "path"]);
    assert_eq!(dom.namespace(dom.body().unwrap()), Some(Namespace::Html));
}

#[test]
fn elements_iterate_in_document_order() {
    let dom = DOM::parse("<main><h1>t</h1><section><p>x</p></section></main><footer></footer>");
    let tags: Vec<_> = dom
        .elements()
        .filter_map(|element| dom.tag_name(element))
        .collect();
    assert_eq!(
        tags,
        vec!["html", "head", "body", "main", "h1", "section", "p", "footer"]
    );
}

#[test]
fn debug_output_is_an_indented_tree() {
    let dom = DOM::parse(r#"<div data-x="1">hi</div>"#);
    let printed = format!("{dom:?}");
    assert!(printed.starts_with("DOM\n#document\n  <html>\n"));
    assert!(printed.contains("      <div data-x=\"1\">\n        \"hi\"\n"));
}
