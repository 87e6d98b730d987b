//! Attribute Stage Tests
//!
//! Value normalization and attribute/property classification, driven through
//! the public API the code generator uses.

use template_compiler::ml_parser::{AttributeMatcher, Element, RawAttribute, SVG_NAMESPACE};
use template_compiler::template_parser::{
    attribute_to_property_name, classify_attribute, is_attribute, is_valid_html_attribute,
    normalize_attribute_value, process_attribute, process_element_attributes,
    AttributeTarget, AttributeValueKind, NormalizedValue,
};
use template_compiler::TemplateSyntaxError;

fn attr(name: &str, value: &str, raw: &str) -> RawAttribute {
    RawAttribute::new(name, value, raw)
}

fn normalize(name: &str, value: &str, raw: &str) -> Result<NormalizedValue, TemplateSyntaxError> {
    normalize_attribute_value(&attr(name, value, raw), raw)
}

fn literal(value: &str) -> NormalizedValue {
    NormalizedValue {
        value: value.to_string(),
        escaped_expression: false,
    }
}

mod normalize_attribute_value {
    use super::*;

    #[test]
    fn should_keep_plain_literals() {
        assert_eq!(normalize("title", "hello", r#"title="hello""#).unwrap(), literal("hello"));
        assert_eq!(normalize("title", "hello", "title=hello").unwrap(), literal("hello"));
    }

    #[test]
    fn should_keep_bare_attributes() {
        assert_eq!(normalize("hidden", "", "hidden").unwrap(), literal(""));
    }

    #[test]
    fn should_be_idempotent_on_literals() {
        let first = normalize("title", "hello world", r#"title="hello world""#).unwrap();
        let raw = format!(r#"title="{}""#, first.value);
        let second = normalize("title", &first.value, &raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn should_accept_unquoted_expressions_verbatim() {
        assert_eq!(normalize("value", "{x}", "value={x}").unwrap(), literal("{x}"));
        assert_eq!(
            normalize("value", "{item.name}", "value={item.name}").unwrap(),
            literal("{item.name}")
        );
    }

    #[test]
    fn should_reject_quoted_expressions() {
        let err = normalize("value", "{x}", r#"value="{x}""#).unwrap_err();
        assert!(matches!(err, TemplateSyntaxError::AmbiguousQuotedExpression { .. }));
        assert_eq!(err.raw(), r#"value="{x}""#);
        assert_eq!(err.suggestions(), vec!["value={x}", r#"value="\{x}""#]);

        let message = err.to_string();
        assert!(message.contains("value={x}"));
        assert!(message.contains(r#"value="\{x}""#));
        assert!(message.starts_with(r#"Ambiguous attribute value value="{x}"."#));
    }

    #[test]
    fn should_strip_the_escape_of_escaped_expressions() {
        let normalized = normalize("value", "\\{x}", r#"value="\{x}""#).unwrap();
        assert_eq!(normalized.value, "{x}");
        assert!(normalized.escaped_expression);
    }

    #[test]
    fn should_strip_the_slash_of_a_self_closing_tag() {
        // <input value={x}/>
        let normalized = normalize("value", "{x}/", "value={x}/").unwrap();
        assert_eq!(normalized, literal("{x}"));
    }

    #[test]
    fn should_reject_a_quoted_value_ending_in_a_slash() {
        let err = normalize("value", "{x}/", r#"value="{x}/""#).unwrap_err();
        assert!(matches!(err, TemplateSyntaxError::UnresolvedExpression { .. }));
    }

    #[test]
    fn should_reject_expressions_followed_by_text() {
        let err = normalize("title", "{a}b", "title={a}b").unwrap_err();
        assert_eq!(err.suggestions(), vec![r#"title="\{a}b""#]);
        assert_eq!(
            err.to_string(),
            r#"Ambiguous attribute value title={a}b. If you want to make it a string you should escape it title="\{a}b""#
        );
    }

    #[test]
    fn should_reject_text_around_a_quoted_expression() {
        let err = normalize("title", "a{b}c", r#"title="a{b}c""#).unwrap_err();
        assert!(matches!(err, TemplateSyntaxError::UnresolvedExpression { .. }));
    }

    #[test]
    fn should_accept_text_with_a_lone_brace() {
        assert_eq!(normalize("title", "{x", r#"title="{x""#).unwrap(), literal("{x"));
        assert_eq!(normalize("title", "x}", r#"title="x}""#).unwrap(), literal("x}"));
    }

    #[test]
    fn should_trust_the_tokenizer_when_the_source_has_no_braces() {
        // entity decoded braces: title="&#123;x&#125;"
        assert_eq!(
            normalize("title", "{x}", r#"title="&#123;x&#125;""#).unwrap(),
            literal("{x}")
        );
    }

    #[test]
    fn should_not_treat_multiline_values_as_expressions() {
        assert_eq!(
            normalize("title", "{a\nb}", "title=\"{a\nb}\"").unwrap(),
            literal("{a\nb}")
        );
    }
}

mod is_attribute {
    use super::*;

    #[test]
    fn should_set_global_attributes() {
        assert!(is_attribute(&Element::new("div"), "class"));
        assert!(is_attribute(&Element::new("x-foo"), "class"));
        assert!(is_attribute(&Element::new("x-foo"), "tabindex"));
    }

    #[test]
    fn should_set_data_and_aria_attributes() {
        assert!(is_attribute(&Element::new("div"), "data-foo"));
        assert!(is_attribute(&Element::new("x-foo"), "data-foo"));
        assert!(is_attribute(&Element::new("x-foo"), "aria-label"));
        assert!(is_attribute(&Element::new("input"), "role"));
    }

    #[test]
    fn should_assign_input_state_as_properties() {
        assert!(!is_attribute(&Element::new("input"), "value"));
        assert!(!is_attribute(&Element::new("input"), "checked"));
        assert!(is_attribute(&Element::new("input"), "type"));
        assert!(is_attribute(&Element::new("option"), "value"));
    }

    #[test]
    fn should_assign_custom_element_fields_as_properties() {
        assert!(!is_attribute(&Element::new("x-foo"), "foo"));
        assert!(!is_attribute(&Element::new("x-foo"), "title-text"));
    }

    #[test]
    fn should_set_attributes_on_builtin_elements() {
        assert!(is_attribute(&Element::new("div"), "foo"));
        assert!(is_attribute(&Element::new("font-face"), "foo"));
        assert!(is_attribute(&Element::new("svg"), "viewBox"));
    }

    #[test]
    fn should_use_the_base_element_of_a_subclassed_builtin() {
        let button =
            Element::new("button").with_attribute(attr("is", "x-button", r#"is="x-button""#));
        assert!(is_attribute(&button, "disabled"));
        assert!(is_attribute(&button, "type"));
        assert!(!is_attribute(&button, "foo"));
        assert!(!is_attribute(&button, "href"));
    }
}

mod is_valid_html_attribute {
    use super::*;

    #[test]
    fn should_accept_attributes_of_the_tag() {
        assert!(is_valid_html_attribute("a", "href"));
        assert!(is_valid_html_attribute("label", "for"));
        assert!(!is_valid_html_attribute("div", "href"));
        assert!(!is_valid_html_attribute("div", "for"));
    }

    #[test]
    fn should_accept_global_and_framework_attributes_anywhere() {
        assert!(is_valid_html_attribute("div", "id"));
        assert!(is_valid_html_attribute("span", "slot"));
        assert!(is_valid_html_attribute("span", "data-id"));
        assert!(is_valid_html_attribute("span", "translate"));
    }

    #[test]
    fn should_accept_anything_on_svg_and_dashed_builtins() {
        assert!(is_valid_html_attribute("circle", "cx"));
        assert!(is_valid_html_attribute("annotation-xml", "encoding"));
    }

    #[test]
    fn should_reject_unknown_attributes() {
        assert!(!is_valid_html_attribute("div", "foo"));
        assert!(!is_valid_html_attribute("x-foo", "foo"));
    }
}

mod attribute_to_property_name {
    use super::*;

    #[test]
    fn should_rename_irregular_attributes() {
        let div = Element::new("div");
        assert_eq!(attribute_to_property_name(&div, "class"), "className");
        assert_eq!(attribute_to_property_name(&Element::new("label"), "for"), "htmlFor");
        assert_eq!(attribute_to_property_name(&div, "tabindex"), "tabIndex");
        assert_eq!(attribute_to_property_name(&Element::new("td"), "colspan"), "colSpan");
    }

    #[test]
    fn should_camel_case_dashed_attributes() {
        let div = Element::new("div");
        assert_eq!(attribute_to_property_name(&div, "accept-charset"), "acceptCharset");
        assert_eq!(attribute_to_property_name(&div, "title"), "title");
    }

    #[test]
    fn should_keep_names_on_foreign_elements() {
        let circle = Element::new("circle");
        assert_eq!(attribute_to_property_name(&circle, "stroke-width"), "stroke-width");

        let a = Element::new("a").with_namespace(SVG_NAMESPACE);
        assert_eq!(attribute_to_property_name(&a, "tabindex"), "tabindex");
    }

    #[test]
    fn should_keep_names_on_custom_elements() {
        let element = Element::new("x-foo");
        assert_eq!(attribute_to_property_name(&element, "title-text"), "title-text");
    }

    #[test]
    fn should_keep_framework_names() {
        let div = Element::new("div");
        assert_eq!(attribute_to_property_name(&div, "data-foo-bar"), "data-foo-bar");
        assert_eq!(attribute_to_property_name(&div, "aria-label"), "aria-label");
    }
}

mod process_element_attributes {
    use super::*;

    #[test]
    fn should_process_attributes_in_source_order() {
        let element = Element::new("input")
            .with_attribute(attr("class", "big", r#"class="big""#))
            .with_attribute(attr("value", "{name}", "value={name}"))
            .with_attribute(attr("placeholder", "\\{name}", r#"placeholder="\{name}""#))
            .with_attribute(attr("key", "{id}", "key={id}"));

        let attrs = process_element_attributes(&element).unwrap();
        let names: Vec<&str> = attrs.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["class", "value", "placeholder", "key"]);

        assert_eq!(attrs[0].target, AttributeTarget::DomAttribute("class".to_string()));
        assert_eq!(attrs[0].kind, AttributeValueKind::Literal);

        assert_eq!(attrs[1].target, AttributeTarget::DomProperty("value".to_string()));
        assert!(attrs[1].is_expression());
        assert_eq!(attrs[1].value, "{name}");

        assert_eq!(attrs[2].target, AttributeTarget::DomAttribute("placeholder".to_string()));
        assert!(attrs[2].escaped_expression());
        assert_eq!(attrs[2].value, "{name}");

        assert_eq!(attrs[3].target, AttributeTarget::Reserved);
    }

    #[test]
    fn should_stop_at_the_first_ambiguous_value() {
        let element = Element::new("div")
            .with_attribute(attr("title", "{a}", r#"title="{a}""#))
            .with_attribute(attr("id", "{b}b", "id={b}b"));

        let err = process_element_attributes(&element).unwrap_err();
        assert!(matches!(err, TemplateSyntaxError::AmbiguousQuotedExpression { .. }));
    }

    #[test]
    fn should_classify_against_the_is_directive_seen_first() {
        let mut element = Element::new("button")
            .with_attribute(attr("foo", "{bar}", "foo={bar}"))
            .with_attribute(attr("is", "x-button", r#"is="x-button""#));

        let attrs = process_element_attributes(&element).unwrap();
        assert_eq!(attrs[0].target, AttributeTarget::DomProperty("foo".to_string()));
        assert_eq!(attrs[1].target, AttributeTarget::Reserved);

        // the driver strips consumed directives afterwards
        element.remove_attribute(&AttributeMatcher::exact("is"));
        assert_eq!(
            classify_attribute(&element, "foo"),
            AttributeTarget::DomAttribute("foo".to_string())
        );
    }

    #[test]
    fn should_keep_the_prefix_of_namespaced_attributes() {
        let svg = Element::new("use").with_namespace(SVG_NAMESPACE);
        let href = attr("href", "#icon", r##"xlink:href="#icon""##).with_prefix("xlink");

        let processed = process_attribute(&svg, &href).unwrap();
        assert_eq!(processed.name, "xlink:href");
        assert_eq!(processed.value, "#icon");
        assert_eq!(processed.kind, AttributeValueKind::Literal);
    }

    #[test]
    fn should_serialize_for_the_code_generator() {
        let element =
            Element::new("x-foo").with_attribute(attr("items", "{list}", "items={list}"));
        let attrs = process_element_attributes(&element).unwrap();

        let json = serde_json::to_value(&attrs[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "items",
                "target": { "kind": "domProperty", "name": "items" },
                "value": "{list}",
                "kind": "expression",
            })
        );
    }
}
