mod common;

use common::{El, FakeDocument};
use schema::{
    Classification, ConvertError, ConvertOptions, Converter, NodeKind, Position, Props,
    SchemaNode, SvgValue, Target, classify, defaults, generate_name, infer_position,
};
use serde_json::json;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn convert_root(document: &FakeDocument) -> Vec<SchemaNode> {
    Converter::new(document, document)
        .convert(Target::Handle(FakeDocument::ROOT))
        .unwrap()
}

fn single(document: &FakeDocument) -> SchemaNode {
    let mut nodes = convert_root(document);
    assert_eq!(nodes.len(), 1);
    nodes.remove(0)
}

#[test]
fn hidden_empty_div_root_converts_to_nothing() {
    init_logging();
    let document = FakeDocument::new(El::new("div").style("display", "none"));
    assert!(convert_root(&document).is_empty());
}

#[test]
fn hidden_div_with_text_is_kept() {
    let document = FakeDocument::new(El::new("div").style("display", "none").text("still here"));
    let node = single(&document);
    assert_eq!(node.kind(), NodeKind::Label);
    assert!(!node.position.display);
}

#[test]
fn icon_class_beats_svg_tag() {
    let document = FakeDocument::new(
        El::new("svg")
            .class("btn-icon-small")
            .child(El::new("path").attr("d", "M0 0")),
    );
    assert_eq!(
        classify(&document, &document, FakeDocument::ROOT),
        Classification::Icon
    );
    let node = single(&document);
    assert_eq!(node.type_name, "display.icon");
    let Props::Icon(props) = &node.props else {
        panic!("expected icon props, got {:?}", node.props);
    };
    assert_eq!(props.path, "material/insert_emoticon");
    assert_eq!(props.color, "#000000");
}

#[test]
fn icon_id_marks_an_icon_and_keeps_only_size_and_color() {
    let document = FakeDocument::new(
        El::new("i")
            .id("search-icon")
            .style("color", "rgb(0, 128, 255)")
            .style("width", "24px")
            .style("height", "24.1px")
            .style("font-size", "20px"),
    );
    let node = single(&document);
    let Props::Icon(props) = &node.props else {
        panic!("expected icon props");
    };
    assert_eq!(props.color, "#0080ff");
    assert_eq!(
        props.style.keys().collect::<Vec<_>>(),
        vec!["width", "color"]
    );
    assert_eq!(node.meta.dom_id.as_deref(), Some("search-icon"));
}

#[test]
fn span_with_text_becomes_a_label() {
    let document = FakeDocument::new(El::new("span").text("Hello"));
    let node = single(&document);
    assert_eq!(node.type_name, "display.label");
    let Props::Label(props) = &node.props else {
        panic!("expected label props");
    };
    assert_eq!(props.text, "Hello");
    assert_eq!(props.style, None);
}

#[test]
fn empty_paragraph_label_falls_back_to_placeholder_text() {
    let document = FakeDocument::new(El::new("p"));
    let Props::Label(props) = single(&document).props else {
        panic!("expected label props");
    };
    assert_eq!(props.text, "Label");
}

#[test]
fn whitespace_only_label_text_trims_to_empty() {
    let document = FakeDocument::new(El::new("p").text("   "));
    let Props::Label(props) = single(&document).props else {
        panic!("expected label props");
    };
    assert_eq!(props.text, "");
}

#[test]
fn leaf_with_text_is_a_label_whatever_its_tag() {
    let document = FakeDocument::new(El::new("button").text(" Save "));
    let node = single(&document);
    assert_eq!(node.kind(), NodeKind::Label);
    assert_eq!(node.meta.name, "Button");
}

#[test]
fn svg_children_copy_attributes_and_wrap_url_fills() {
    let document = FakeDocument::new(
        El::new("svg")
            .attr("viewBox", "0 0 24 24")
            .attr("width", "24")
            .attr("height", "100%")
            .attr("fill", "none")
            .child(
                El::new("defs").child(
                    El::new("linearGradient")
                        .id("grad1")
                        .child(El::new("stop").attr("stop-color", "#fff")),
                ),
            )
            .child(
                El::new("path")
                    .attr("fill", "url(#grad1)")
                    .attr("stroke-width", " 2 "),
            ),
    );
    let node = single(&document);
    assert_eq!(node.type_name, "shapes.svg");
    assert_eq!(node.meta.name, "SvgGraphic");
    let Props::Svg(props) = &node.props else {
        panic!("expected svg props");
    };
    assert_eq!(props.view_box.as_deref(), Some("0 0 24 24"));
    assert_eq!(props.width.as_deref(), Some("24"));
    assert_eq!(props.height, None);
    assert_eq!(
        props.style.as_ref().and_then(|style| style.get("fill")),
        Some(&"none".to_owned())
    );

    let path = &props.elements[1];
    assert_eq!(
        path.keys().collect::<Vec<_>>(),
        vec!["type", "name", "fill", "strokeWidth"]
    );
    assert_eq!(path.text("type"), Some("path"));
    assert_eq!(
        path.get("fill"),
        Some(&SvgValue::Url {
            url: "url(#grad1)".to_owned()
        })
    );
    assert_eq!(path.text("strokeWidth"), Some("2"));

    let gradient = &props.elements[0].elements()[0];
    assert_eq!(gradient.text("name"), Some("lineargradient"));
    assert_eq!(gradient.elements()[0].text("stopColor"), Some("#fff"));

    let value = serde_json::to_value(&node).unwrap();
    assert_eq!(value["props"]["elements"][1]["fill"], json!({ "url": "url(#grad1)" }));
}

#[test]
fn svg_root_presentation_attributes_join_the_style() {
    let stroked = FakeDocument::new(
        El::new("svg")
            .attr("stroke", "currentColor")
            .attr("fill", "currentColor")
            .attr("stroke-width", "2")
            .attr("data-kind", "chart")
            .child(El::new("path").attr("d", "M0 0")),
    );
    let value = serde_json::to_value(single(&stroked)).unwrap();
    assert_eq!(
        value["props"]["style"],
        json!({ "stroke": "currentColor", "strokeWidth": "2" })
    );

    let unpainted = FakeDocument::new(
        El::new("svg")
            .attr("stroke", "none")
            .attr("fill", "none")
            .child(El::new("path").attr("d", "M0 0")),
    );
    let value = serde_json::to_value(single(&unpainted)).unwrap();
    assert_eq!(value["props"]["style"], json!({ "fill": "none" }));
}

#[test]
fn names_prefer_id_then_class_then_tag() {
    let document = FakeDocument::new(
        El::new("div")
            .child(El::new("section").id("hero"))
            .child(El::new("h3"))
            .child(El::new("section"))
            .child(El::new("div").class("  card primary")),
    );
    let children: Vec<usize> = (1..=4).collect();
    let names: Vec<String> = children
        .iter()
        .map(|&child| generate_name(&document, child))
        .collect();
    assert_eq!(names, vec!["hero", "Heading3", "Section", "card"]);
}

#[test]
fn grid_is_always_fully_flexible() {
    let document = FakeDocument::new(
        El::new("div")
            .style("display", "grid")
            .style("flex-grow", "0")
            .style("flex-shrink", "0")
            .style("flex-basis", "120px"),
    );
    assert_eq!(
        infer_position(&document, FakeDocument::ROOT),
        Position::fully_flexible()
    );
    assert_eq!(
        serde_json::to_value(Position::fully_flexible()).unwrap(),
        json!({ "grow": 1, "shrink": 1, "display": true })
    );
}

#[test]
fn shrink_is_emitted_only_when_not_one() {
    let document = FakeDocument::new(
        El::new("div")
            .child(El::new("div").style("flex-shrink", "1"))
            .child(El::new("div").style("flex-shrink", "0"))
            .child(El::new("div").style("flex-shrink", "3")),
    );
    let shrinks: Vec<Option<i64>> = (1..=3)
        .map(|child| infer_position(&document, child).shrink)
        .collect();
    assert_eq!(shrinks, vec![None, Some(0), Some(3)]);
}

#[test]
fn basis_comes_from_flex_and_implausible_values_become_auto() {
    let document = FakeDocument::new(
        El::new("div")
            .child(
                El::new("div")
                    .style("flex-grow", "1")
                    .style("flex", "1 1 0%"),
            )
            .child(El::new("div").style("flex-basis", "313.417px"))
            .child(El::new("div").style("display", "none")),
    );
    let grow = infer_position(&document, 1);
    assert_eq!(grow.grow, Some(1));
    assert_eq!(grow.basis.as_deref(), Some("0%"));
    assert_eq!(infer_position(&document, 2).basis.as_deref(), Some("auto"));
    assert!(!infer_position(&document, 3).display);
}

#[test]
fn default_valued_properties_never_reach_the_style() {
    let mut root = El::new("section");
    for &(property, default) in defaults::DEFAULT_VALUES {
        root = root.style(property, default);
    }
    let document = FakeDocument::new(root.child(El::new("div")));
    let node = single(&document);
    let Props::Container(props) = &node.props else {
        panic!("expected container props");
    };
    assert_eq!(props.style, None);
}

#[test]
fn block_container_becomes_a_column_and_promoted_style_is_removed() {
    let document = FakeDocument::new(
        El::new("div")
            .id("main")
            .style("display", "flex")
            .style("flex-direction", "row-reverse")
            .style("align-items", "flex-start")
            .style("justify-content", "space-between")
            .style("flex-wrap", "wrap")
            .style("align-content", "center")
            .style("background-color", "rgb(255, 255, 255)")
            .style("padding", "8px")
            .child(El::new("div").style("display", "none"))
            .child(El::new("div").child(El::new("span").text("a"))),
    );
    let node = single(&document);
    let value = serde_json::to_value(&node).unwrap();
    assert_eq!(
        value["props"],
        json!({
            "direction": "row-reverse",
            "alignItems": "flexStart",
            "wrap": "wrap",
            "justify": "space-between",
            "alignContent": "center",
            "style": {
                "backgroundColor": "#ffffff",
                "padding": "8px"
            }
        })
    );
    assert_eq!(value["meta"], json!({ "name": "main", "domId": "main" }));
    assert_eq!(value["version"], json!(0));
    assert_eq!(value["custom"], json!({}));

    // The hidden empty child is dropped; the plain block child stacks as a column.
    assert_eq!(node.children().len(), 1);
    let Props::Container(inner) = &node.children()[0].props else {
        panic!("expected nested container");
    };
    assert_eq!(inner.direction.as_deref(), Some("column"));
    assert_eq!(node.children()[0].children()[0].kind(), NodeKind::Label);
}

#[test]
fn containers_without_children_omit_the_key() {
    let document = FakeDocument::new(El::new("div").child(El::new("img")));
    let node = single(&document);
    let image = &node.children()[0];
    assert_eq!(image.kind(), NodeKind::Container);
    assert_eq!(image.meta.name, "Image");
    let value = serde_json::to_value(image).unwrap();
    assert!(value.get("children").is_none());
}

#[test]
fn type_prefix_is_applied_to_every_node() {
    let document = FakeDocument::new(El::new("div").child(El::new("span").text("x")));
    let options = ConvertOptions {
        type_prefix: "ia.".to_owned(),
        ..ConvertOptions::default()
    };
    let nodes = Converter::with_options(&document, &document, options)
        .convert(Target::Selector("div"))
        .unwrap();
    assert_eq!(nodes[0].type_name, "ia.container.flex");
    assert_eq!(nodes[0].children()[0].type_name, "ia.display.label");
}

#[test]
fn input_errors_are_reported() {
    init_logging();
    let mut document = FakeDocument::new(El::new("div").id("app"));
    let converter = Converter::new(&document, &document);
    assert_eq!(
        converter.convert(Target::Selector("  ")),
        Err(ConvertError::InvalidInput)
    );
    assert_eq!(
        converter.convert(Target::Selector("#missing")),
        Err(ConvertError::NotFound("#missing".to_owned()))
    );
    assert_eq!(
        converter.convert_selected(&document),
        Err(ConvertError::NoSelection)
    );

    let app = document.by_id("app");
    document.select(Some(app));
    let converter = Converter::new(&document, &document);
    assert_eq!(converter.convert_selected(&document).unwrap().len(), 1);
}
