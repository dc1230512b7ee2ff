use super::*;
use serde_json::json;

#[test]
fn known_names_resolve_case_insensitively() {
    for name in LayoutName::ALL {
        let upper = name.as_str().to_ascii_uppercase();
        let config = DefaultLayoutResolver.resolve(&RawLayout::named(format!(" {upper} ")));
        assert_eq!(config.name, name);
    }
}

#[test]
fn unknown_name_falls_back_to_circle() {
    let config = DefaultLayoutResolver.resolve(&RawLayout::named("spiral-galaxy"));
    assert_eq!(config.name, LayoutName::Circle);
    assert!(config.avoid_overlap);

    let empty = DefaultLayoutResolver.resolve(&RawLayout::named(""));
    assert_eq!(empty.name, LayoutName::FALLBACK);
}

#[test]
fn avoid_overlap_defaults_to_true_and_can_be_disabled() {
    let config = DefaultLayoutResolver.resolve(&RawLayout::named("grid"));
    assert!(config.avoid_overlap);

    let config = DefaultLayoutResolver.resolve(&RawLayout::named("grid").with_avoid_overlap(false));
    assert!(!config.avoid_overlap);
}

#[test]
fn per_layout_defaults_differ() {
    let breadthfirst = LayoutConfig::defaults_for(LayoutName::Breadthfirst);
    assert!(breadthfirst.directed);
    assert_eq!(breadthfirst.spacing_factor, 1.75);

    let cose = LayoutConfig::defaults_for(LayoutName::Cose);
    assert!(cose.animate);
    assert!(cose.node_dimensions_include_labels);

    let preset = LayoutConfig::defaults_for(LayoutName::Preset);
    assert!(!preset.fit);

    let circle = LayoutConfig::defaults_for(LayoutName::Circle);
    assert!(circle.fit);
    assert_eq!(circle.padding, 30);
    assert!(!circle.directed);
}

#[test]
fn known_options_override_defaults() {
    let raw = RawLayout::named("circle")
        .with_option("padding", 12)
        .with_option("animate", true)
        .with_option("spacingFactor", 2.5)
        .with_option("fit", false);
    let config = DefaultLayoutResolver.resolve(&raw);

    assert_eq!(config.padding, 12);
    assert!(config.animate);
    assert_eq!(config.spacing_factor, 2.5);
    assert!(!config.fit);
    assert!(config.extra.is_empty());
}

#[test]
fn ill_typed_options_keep_defaults() {
    let raw = RawLayout::named("grid")
        .with_option("padding", "lots")
        .with_option("spacingFactor", -1.0)
        .with_option("animate", 1);
    let config = DefaultLayoutResolver.resolve(&raw);
    let defaults = LayoutConfig::defaults_for(LayoutName::Grid);

    assert_eq!(config.padding, defaults.padding);
    assert_eq!(config.spacing_factor, defaults.spacing_factor);
    assert_eq!(config.animate, defaults.animate);
}

#[test]
fn unknown_options_pass_through() {
    let raw = RawLayout::named("concentric").with_option("minNodeSpacing", 40);
    let config = DefaultLayoutResolver.resolve(&raw);
    assert_eq!(config.extra.get("minNodeSpacing"), Some(&json!(40)));
}

#[test]
fn resolution_is_deterministic() {
    let raw = RawLayout::named("cose")
        .with_option("b", 2)
        .with_option("a", 1)
        .with_avoid_overlap(false);
    assert_eq!(
        DefaultLayoutResolver.resolve(&raw),
        DefaultLayoutResolver.resolve(&raw.clone())
    );
}

#[test]
fn raw_layout_deserializes_camel_case_with_extra_options() {
    let raw: RawLayout =
        serde_json::from_value(json!({"name": "grid", "avoidOverlap": false, "rows": 3}))
            .unwrap();
    assert_eq!(raw.name, "grid");
    assert_eq!(raw.avoid_overlap, Some(false));
    assert_eq!(raw.options.get("rows"), Some(&json!(3)));
}

#[test]
fn resolved_config_serializes_for_the_renderer() {
    let config = DefaultLayoutResolver.resolve(&RawLayout::named("grid").with_option("rows", 2));
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["name"], "grid");
    assert_eq!(value["avoidOverlap"], true);
    assert_eq!(value["rows"], 2);
}

#[test]
fn closures_can_act_as_resolvers() {
    let fixed = |_: &RawLayout| LayoutConfig::defaults_for(LayoutName::Random);
    let config = fixed.resolve(&RawLayout::named("grid"));
    assert_eq!(config.name, LayoutName::Random);
}

#[test]
fn default_config_is_circle_with_overlap_avoidance() {
    let config = LayoutConfig::default();
    assert_eq!(config.name, LayoutName::Circle);
    assert!(config.avoid_overlap);
}
