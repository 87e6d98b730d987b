//! DOM Element Schema Registry
//!
//! Static HTML semantics consulted while classifying attributes: foreign and
//! dash-cased tag names, the framework's reserved attribute names and the
//! irregular attribute to property renames.
//!
//! All tables are built once on first access and never mutated afterwards.

use super::element_schema_registry::ElementSchemaRegistry;
use super::html_attributes::{GLOBAL_ATTRIBUTE_SET, HTML_ATTRIBUTES_REVERSE_LOOKUP};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// `data-*` and `aria-*` attributes
pub static DATA_ARIA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(data|aria)-").unwrap());

/// Attribute names owned by the framework, always set as attributes
pub const FRAMEWORK_ATTRIBUTES: [&str; 4] = ["role", "is", "key", "slot"];

/// SVG element names
///
/// Names shared with HTML (`a`, `audio`, `canvas`, `iframe`, `script`, `style`,
/// `title`, `video`) are left out: those tags only count as SVG through the
/// element namespace.
pub static SVG_TAG_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "altGlyph",
        "altGlyphDef",
        "altGlyphItem",
        "animate",
        "animateColor",
        "animateMotion",
        "animateTransform",
        "animation",
        "circle",
        "clipPath",
        "color-profile",
        "cursor",
        "defs",
        "desc",
        "discard",
        "ellipse",
        "feBlend",
        "feColorMatrix",
        "feComponentTransfer",
        "feComposite",
        "feConvolveMatrix",
        "feDiffuseLighting",
        "feDisplacementMap",
        "feDistantLight",
        "feDropShadow",
        "feFlood",
        "feFuncA",
        "feFuncB",
        "feFuncG",
        "feFuncR",
        "feGaussianBlur",
        "feImage",
        "feMerge",
        "feMergeNode",
        "feMorphology",
        "feOffset",
        "fePointLight",
        "feSpecularLighting",
        "feSpotLight",
        "feTile",
        "feTurbulence",
        "filter",
        "font-face",
        "font-face-format",
        "font-face-name",
        "font-face-src",
        "font-face-uri",
        "foreignObject",
        "g",
        "glyph",
        "glyphRef",
        "handler",
        "hatch",
        "hatchpath",
        "hkern",
        "image",
        "line",
        "linearGradient",
        "listener",
        "marker",
        "mask",
        "mesh",
        "meshgradient",
        "meshpatch",
        "meshrow",
        "metadata",
        "missing-glyph",
        "mpath",
        "path",
        "pattern",
        "polygon",
        "polyline",
        "prefetch",
        "radialGradient",
        "rect",
        "set",
        "solidColor",
        "solidcolor",
        "stop",
        "svg",
        "switch",
        "symbol",
        "tbreak",
        "text",
        "textArea",
        "textPath",
        "tref",
        "tspan",
        "use",
        "view",
        "vkern",
    ]
    .into_iter()
    .collect()
});

/// Built-in element names containing a dash, which are not custom elements
pub static DASHED_TAGNAME_ELEMENT_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "annotation-xml",
        "color-profile",
        "font-face",
        "font-face-src",
        "font-face-uri",
        "font-face-format",
        "font-face-name",
        "missing-glyph",
    ]
    .into_iter()
    .collect()
});

/// Attribute names whose DOM property is not a plain camelCase of the attribute
pub static ATTRS_PROPS_TRANSFORMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // Irregular names
    map.insert("class", "className");
    map.insert("for", "htmlFor");
    map.insert("char", "ch");
    map.insert("charoff", "chOff");

    // Lower-cased multi-word attributes
    map.insert("accesskey", "accessKey");
    map.insert("alink", "aLink");
    map.insert("allowfullscreen", "allowFullscreen");
    map.insert("bgcolor", "bgColor");
    map.insert("cellpadding", "cellPadding");
    map.insert("cellspacing", "cellSpacing");
    map.insert("codebase", "codeBase");
    map.insert("codetype", "codeType");
    map.insert("colspan", "colSpan");
    map.insert("contenteditable", "contentEditable");
    map.insert("crossorigin", "crossOrigin");
    map.insert("datetime", "dateTime");
    map.insert("dirname", "dirName");
    map.insert("disablepictureinpicture", "disablePictureInPicture");
    map.insert("disableremoteplayback", "disableRemotePlayback");
    map.insert("enterkeyhint", "enterKeyHint");
    map.insert("fetchpriority", "fetchPriority");
    map.insert("formaction", "formAction");
    map.insert("formenctype", "formEnctype");
    map.insert("formmethod", "formMethod");
    map.insert("formnovalidate", "formNoValidate");
    map.insert("formtarget", "formTarget");
    map.insert("frameborder", "frameBorder");
    map.insert("imagesizes", "imageSizes");
    map.insert("imagesrcset", "imageSrcset");
    map.insert("inputmode", "inputMode");
    map.insert("ismap", "isMap");
    map.insert("longdesc", "longDesc");
    map.insert("marginheight", "marginHeight");
    map.insert("marginwidth", "marginWidth");
    map.insert("maxlength", "maxLength");
    map.insert("minlength", "minLength");
    map.insert("nohref", "noHref");
    map.insert("nomodule", "noModule");
    map.insert("noresize", "noResize");
    map.insert("noshade", "noShade");
    map.insert("novalidate", "noValidate");
    map.insert("nowrap", "noWrap");
    map.insert("playsinline", "playsInline");
    map.insert("readonly", "readOnly");
    map.insert("referrerpolicy", "referrerPolicy");
    map.insert("rowspan", "rowSpan");
    map.insert("tabindex", "tabIndex");
    map.insert("usemap", "useMap");
    map.insert("valign", "vAlign");
    map.insert("valuetype", "valueType");
    map.insert("vlink", "vLink");

    map
});

/// Registry backed by the static HTML tables of this module
#[derive(Debug, Clone, Copy, Default)]
pub struct DomElementSchemaRegistry;

/// Shared instance used by the free classification functions
pub static DOM_ELEMENT_SCHEMA_REGISTRY: DomElementSchemaRegistry = DomElementSchemaRegistry;

impl ElementSchemaRegistry for DomElementSchemaRegistry {
    fn is_global_attribute(&self, attr_name: &str) -> bool {
        GLOBAL_ATTRIBUTE_SET.contains(attr_name)
    }

    fn is_aria_or_data_or_framework_attribute(&self, attr_name: &str) -> bool {
        FRAMEWORK_ATTRIBUTES.contains(&attr_name) || DATA_ARIA_RE.is_match(attr_name)
    }

    fn is_svg_tag(&self, tag_name: &str) -> bool {
        SVG_TAG_SET.contains(tag_name)
    }

    fn is_dashed_builtin_tag(&self, tag_name: &str) -> bool {
        DASHED_TAGNAME_ELEMENT_SET.contains(tag_name)
    }

    fn valid_elements_of_attribute(&self, attr_name: &str) -> Option<&[&'static str]> {
        HTML_ATTRIBUTES_REVERSE_LOOKUP
            .get(attr_name)
            .map(|tags| tags.as_slice())
    }

    fn get_mapped_prop_name(&self, attr_name: &str) -> Option<&'static str> {
        ATTRS_PROPS_TRANSFORMS.get(attr_name).copied()
    }
}
