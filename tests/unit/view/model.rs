use super::*;

#[test]
fn json_round_trips_a_nested_view() {
    let json = r#"{
        "vstack": {
            "alignment": "leading",
            "spacing": 4,
            "children": [
                {"text": {"content": "Title", "modifiers": [{"font": {"size_px": 28}}]}},
                "divider",
                {"group": [{"image": {"asset": "img/a.png"}}, null]},
                {"modified": {"content": "spacer", "modifier": {"padding": {"top": 5}}}}
            ]
        }
    }"#;
    let view = View::from_json_str(json).unwrap();

    let View::VStack(stack) = &view else {
        panic!("expected vstack, got {view:?}");
    };
    assert_eq!(stack.alignment, HorizontalAlignment::Leading);
    assert_eq!(stack.spacing, Some(4.0));
    assert_eq!(stack.children.len(), 4);

    let View::Text(t) = &stack.children[0] else {
        panic!("expected text");
    };
    assert_eq!(t.font_override(), Some(Font::system(28.0)));

    let back = View::from_json_str(&view.to_json_string_pretty().unwrap()).unwrap();
    assert_eq!(back, view);
}

#[test]
fn unknown_variant_is_a_serde_error() {
    let err = View::from_json_str(r#""triangle""#).unwrap_err();
    assert!(matches!(err, ViewError::Serde(_)), "{err}");
}

#[test]
fn validation_rejects_bad_values() {
    let bad_font = View::Text(TextView {
        content: "x".to_string(),
        modifiers: vec![TextModifier::Font(Font::system(0.0))],
    });
    assert!(matches!(
        bad_font.validate(),
        Err(ViewError::Validation(_))
    ));

    let bad_spacing = View::HStack(HStackView {
        spacing: Some(f64::NAN),
        ..HStackView::default()
    });
    assert!(bad_spacing.validate().is_err());

    let bad_padding = View::Modified {
        content: Box::new(View::Spacer),
        modifier: Modifier::Padding(EdgeInsets::uniform(f64::INFINITY)),
    };
    assert!(bad_padding.validate().is_err());

    let empty_asset = View::Image {
        asset: "  ".to_string(),
    };
    assert!(empty_asset.validate().is_err());
}

#[test]
fn baseline_alignment_passes_validation() {
    let v = View::HStack(HStackView {
        alignment: VerticalAlignment::FirstTextBaseline,
        ..HStackView::default()
    });
    assert!(v.validate().is_ok());
}

#[test]
fn edges_expand_to_insets() {
    assert_eq!(Edges::All.insets(None), EdgeInsets::uniform(20.0));
    assert_eq!(
        Edges::Horizontal.insets(Some(3.0)),
        EdgeInsets::new(0.0, 3.0, 0.0, 3.0)
    );
    assert_eq!(
        Edges::Bottom.insets(Some(1.0)),
        EdgeInsets::new(0.0, 0.0, 1.0, 0.0)
    );
}

#[test]
fn images_are_visited_in_document_order() {
    let v = View::HStack(HStackView {
        children: vec![
            View::Image {
                asset: "a.png".to_string(),
            },
            View::Group(vec![
                None,
                Some(View::Modified {
                    content: Box::new(View::Image {
                        asset: "b.png".to_string(),
                    }),
                    modifier: Modifier::Background(Color::Red),
                }),
            ]),
        ],
        ..HStackView::default()
    });
    let mut seen = Vec::new();
    v.for_each_image(&mut |k| seen.push(k.to_string()));
    assert_eq!(seen, vec!["a.png", "b.png"]);
}
