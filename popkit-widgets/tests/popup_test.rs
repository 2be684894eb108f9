//! Tests for the popup builder

use indexmap::IndexMap;
use popkit_core::dom::Document;
use popkit_theme::{Animation, PopupConfig, PopupError, Position, TagMode, ThemeName};
use popkit_widgets::popup::PopupBuilder;
use popkit_widgets::style::Css;
use serde_json::json;

fn popup() -> (Document, PopupBuilder) {
    let document = Document::new();
    let popup = PopupBuilder::new(&document);
    (document, popup)
}

fn replacing_popup() -> PopupBuilder {
    let config = PopupConfig::new().with_tag_mode(TagMode::Replace);
    PopupBuilder::with_config(&Document::new(), config)
}

#[test]
fn test_new_popup_is_bare() {
    let (document, popup) = popup();

    assert_eq!(popup.node().tag_name().as_deref(), Some("div"));
    assert_eq!(popup.node().classes(), vec!["popupjs"]);
    assert_eq!(popup.content(), "");
    assert!(!popup.is_shown());
    assert!(!popup.is_attached());
    assert!(document.body().children().is_empty());
    assert_eq!(popup.tag_mode(), TagMode::Accumulate);
}

#[test]
fn test_set_content_is_verbatim() {
    let (_document, mut popup) = popup();

    for message in ["", "hi", "<b>bold</b>", "<script>alert(1)</script>", "ünïcødé & <"] {
        popup.set_content(message);
        assert_eq!(popup.content(), message);
    }
}

#[test]
fn test_set_theme_accepts_any_name() {
    let (_document, mut popup) = popup();

    popup.set_theme("neon");

    assert!(popup.node().has_class("popup-theme-neon"));
    assert_eq!(popup.theme(), Some(&ThemeName::from("neon")));
}

#[test]
fn test_set_theme_with_whitespace_is_kept_verbatim() {
    let (_document, mut popup) = popup();

    popup.set_theme("dark mode");

    assert!(popup.node().has_class("popup-theme-dark mode"));
    assert_eq!(popup.node().classes(), vec!["popupjs", "popup-theme-dark mode"]);
    assert_eq!(popup.theme(), Some(&ThemeName::from("dark mode")));
}

#[test]
fn test_set_animation() {
    let (_document, mut popup) = popup();

    popup.set_animation("bottom").unwrap();
    assert!(popup.node().has_class("popup-animation-bottom"));
    assert_eq!(popup.animation(), Some(Animation::Bottom));

    popup.set_animation("top").unwrap();
    assert!(popup.node().has_class("popup-animation-top"));
}

#[test]
fn test_set_animation_rejects_others() {
    let (_document, mut popup) = popup();

    for id in ["", "left", "Top", "bottom ", "fade-in"] {
        let err = popup.set_animation(id).unwrap_err();
        assert_eq!(err, PopupError::InvalidInput("Invalid keyframesId".into()));
    }
    assert_eq!(popup.node().classes(), vec!["popupjs"]);
    assert_eq!(popup.animation(), None);
}

#[test]
fn test_set_position_classes() {
    let expected = [
        ("top left", "popup-top-left"),
        ("top right", "popup-top-right"),
        ("bottom right", "popup-bottom-right"),
        ("bottom left", "popup-bottom-left"),
    ];

    for (side, class) in expected {
        let (_document, mut popup) = popup();
        popup.set_position(side).unwrap();
        assert_eq!(popup.node().classes(), vec!["popupjs", class]);
    }
}

#[test]
fn test_set_position_rejects_others() {
    let (_document, mut popup) = popup();

    for side in ["top-left", "top", "TOP LEFT", "left", "top right "] {
        assert_eq!(
            popup.set_position(side).unwrap_err(),
            PopupError::invalid("Invalid side")
        );
    }
    assert_eq!(popup.position(), None);
}

#[test]
fn test_set_position_typed() {
    let (_document, mut popup) = popup();

    popup.set_position(Position::BottomLeft).unwrap();

    assert!(popup.node().has_class("popup-bottom-left"));
}

#[test]
fn test_set_style_markup_replaces_content() {
    let (_document, mut popup) = popup();
    popup.set_content("before");

    popup.set_style("<b>hi</b>").unwrap();

    assert_eq!(popup.content(), "<b>hi</b>");
    assert!(popup.node().style_properties().is_empty());
}

#[test]
fn test_set_style_map_keeps_content() {
    let (_document, mut popup) = popup();
    popup.set_content("kept");

    popup.set_style(&json!({"color": "red"})).unwrap();

    assert_eq!(popup.node().style_property("color").as_deref(), Some("red"));
    assert_eq!(popup.content(), "kept");
}

#[test]
fn test_set_style_merges() {
    let (_document, mut popup) = popup();

    popup.set_style(Css::style([("color", "red"), ("top", "4px")])).unwrap();
    popup.set_style(&json!({"color": "blue", "top": null, "opacity": 0.5})).unwrap();

    assert_eq!(
        popup.node().style_properties(),
        vec![
            ("color".to_string(), "blue".to_string()),
            ("opacity".to_string(), "0.5".to_string()),
        ]
    );
}

#[test]
fn test_set_style_camel_case_names() {
    let (_document, mut popup) = popup();

    popup
        .set_style(&json!({"backgroundColor": "red", "zIndex": 10, "--accent-color": "blue"}))
        .unwrap();

    assert_eq!(popup.node().style_property("background-color").as_deref(), Some("red"));
    assert_eq!(popup.node().style_property("z-index").as_deref(), Some("10"));
    assert_eq!(popup.node().style_property("--accent-color").as_deref(), Some("blue"));
    assert_eq!(popup.node().style_property("backgroundColor"), None);
    assert!(popup.to_html().contains("background-color: red;"));
}

#[test]
fn test_set_style_typed_map() {
    let (_document, mut popup) = popup();
    let mut properties = IndexMap::new();
    properties.insert("margin".to_string(), "0".to_string());

    popup.set_style(properties).unwrap();

    assert_eq!(popup.node().style_property("margin").as_deref(), Some("0"));
}

#[test]
fn test_set_style_rejects_other_shapes() {
    let (_document, mut popup) = popup();
    popup.set_content("untouched");

    for value in [json!(42), json!(null), json!([1, 2]), json!(false)] {
        assert_eq!(
            popup.set_style(&value).unwrap_err(),
            PopupError::invalid("Invalid CSS object")
        );
    }
    assert_eq!(popup.content(), "untouched");
    assert!(popup.node().style_properties().is_empty());
}

#[test]
fn test_show_hide() {
    let (_document, mut popup) = popup();

    popup.show().show();
    assert!(popup.is_shown());
    assert_eq!(
        popup.node().classes().iter().filter(|c| *c == "popup-show").count(),
        1
    );

    popup.hide();
    assert!(!popup.is_shown());
    popup.hide();
    assert!(!popup.is_shown());
}

#[test]
fn test_attach_defaults_to_body() {
    let (document, mut popup) = popup();

    popup.attach(None).unwrap();

    assert!(popup.is_attached());
    assert_eq!(popup.node().parent(), Some(document.body()));
    assert_eq!(document.body().children(), vec![popup.node().clone()]);
}

#[test]
fn test_attach_to_container() {
    let (document, mut popup) = popup();
    let container = document.create_element("section");
    document.body().append_child(&container).unwrap();

    popup.attach(Some(&container)).unwrap();

    assert_eq!(container.children(), vec![popup.node().clone()]);
    assert!(document.contains(popup.node()));
}

#[test]
fn test_attach_rejects_non_element() {
    let (document, mut popup) = popup();
    let text = document.create_text_node("not an element");

    let err = popup.attach(Some(&text)).unwrap_err();

    assert_eq!(err, PopupError::invalid("Invalid root"));
    assert!(!popup.is_attached());
}

#[test]
fn test_attach_rejects_own_node() {
    let (_document, mut popup) = popup();
    let own = popup.node().clone();

    assert_eq!(
        popup.attach(Some(&own)).unwrap_err(),
        PopupError::invalid("Invalid root")
    );
    assert!(!popup.is_attached());
}

#[test]
fn test_failed_attach_keeps_previous_parent() {
    let (document, mut popup) = popup();
    popup.attach(None).unwrap();

    let text = document.create_text_node("x");
    assert!(popup.attach(Some(&text)).is_err());

    assert_eq!(popup.node().parent(), Some(document.body()));
}

#[test]
fn test_reattach_moves_node() {
    let (document, mut popup) = popup();
    let container = document.create_element("aside");

    popup.attach(None).unwrap();
    popup.attach(Some(&container)).unwrap();

    assert!(document.body().children().is_empty());
    assert_eq!(container.children(), vec![popup.node().clone()]);
}

#[test]
fn test_replace_mode_swaps_dimension_classes() {
    let mut popup = replacing_popup();

    popup.set_theme("light").set_theme("dark");
    popup.set_position("top left").unwrap().set_position("bottom right").unwrap();
    popup.set_animation("top").unwrap().set_animation("bottom").unwrap();

    assert_eq!(
        popup.node().classes(),
        vec![
            "popupjs",
            "popup-theme-dark",
            "popup-bottom-right",
            "popup-animation-bottom",
        ]
    );
}

#[test]
fn test_replace_mode_same_value_twice() {
    let mut popup = replacing_popup();

    popup.set_theme("dark").set_theme("dark");

    assert_eq!(popup.node().classes(), vec!["popupjs", "popup-theme-dark"]);
}

#[test]
fn test_default_mode_keeps_previous_classes() {
    let (_document, mut popup) = popup();

    popup.set_theme("light").set_theme("dark");
    popup.set_position("top left").unwrap().set_position("bottom right").unwrap();

    assert_eq!(
        popup.node().classes(),
        vec![
            "popupjs",
            "popup-theme-light",
            "popup-theme-dark",
            "popup-top-left",
            "popup-bottom-right",
        ]
    );
    assert_eq!(popup.theme(), Some(&ThemeName::dark()));
    assert_eq!(popup.position(), Some(Position::BottomRight));
}

#[test]
fn test_default_mode_same_value_twice() {
    let (_document, mut popup) = popup();

    popup.set_theme("dark").set_theme("dark");

    assert_eq!(popup.node().classes(), vec!["popupjs", "popup-theme-dark"]);
}

#[test]
fn test_failed_call_keeps_earlier_state() {
    let (_document, mut popup) = popup();

    let result = popup
        .set_content("hi")
        .set_theme("dark")
        .set_position("nowhere")
        .map(|popup| popup.show());

    assert!(result.is_err());
    assert_eq!(popup.content(), "hi");
    assert!(popup.node().has_class("popup-theme-dark"));
    assert!(!popup.is_shown());
}

#[test]
fn test_to_html() {
    let (_document, mut popup) = popup();

    popup
        .set_content("<b>hi</b>")
        .set_theme("dark")
        .set_style(&json!({"color": "red"}))
        .unwrap()
        .show();

    assert_eq!(
        popup.to_html(),
        r#"<div class="popupjs popup-theme-dark popup-show" style="color: red;"><b>hi</b></div>"#
    );
}
