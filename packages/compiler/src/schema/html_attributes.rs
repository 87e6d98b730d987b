//! HTML Attributes
//!
//! Which attributes the HTML standard defines on which elements.
//!
//! ## Format:
//! Each line: `attribute|tags`
//!
//! - Tags are separated by `,`
//! - An empty tag list means the attribute is valid on every element
//!
//! Entries follow the attribute/element matrix of the HTML Living Standard, plus
//! the obsolete presentational attributes that browsers still reflect.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Attributes common to every HTML element that the compiler always sets with `setAttribute`
pub static GLOBAL_ATTRIBUTE_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "role",
        "accesskey",
        "class",
        "contenteditable",
        "contextmenu",
        "dir",
        "draggable",
        "dropzone",
        "hidden",
        "id",
        "itemprop",
        "lang",
        "slot",
        "spellcheck",
        "style",
        "tabindex",
        "title",
    ]
    .into_iter()
    .collect()
});

pub static HTML_ATTRIBUTES: &[&str] = &[
    // Global attributes
    "accesskey|",
    "autocapitalize|",
    "autofocus|",
    "class|",
    "contenteditable|",
    "dir|",
    "draggable|",
    "enterkeyhint|",
    "hidden|",
    "id|",
    "inert|",
    "inputmode|",
    "is|",
    "itemid|",
    "itemprop|",
    "itemref|",
    "itemscope|",
    "itemtype|",
    "lang|",
    "nonce|",
    "popover|",
    "slot|",
    "spellcheck|",
    "style|",
    "tabindex|",
    "title|",
    "translate|",
    // Element specific attributes
    "abbr|th",
    "accept|form,input",
    "accept-charset|form",
    "action|form",
    "align|applet,caption,col,colgroup,div,embed,h1,h2,h3,h4,h5,h6,hr,iframe,img,input,legend,object,p,table,tbody,td,tfoot,th,thead,tr",
    "alink|body",
    "allow|iframe",
    "allowfullscreen|iframe",
    "alt|applet,area,img,input",
    "archive|applet,object",
    "as|link",
    "async|script",
    "autocomplete|form,input,select,textarea",
    "autoplay|audio,video",
    "axis|td,th",
    "background|body",
    "bgcolor|body,table,td,th,tr",
    "blocking|link,script,style",
    "border|img,object,table",
    "cellpadding|table",
    "cellspacing|table",
    "char|col,colgroup,tbody,td,tfoot,th,thead,tr",
    "charoff|col,colgroup,tbody,td,tfoot,th,thead,tr",
    "charset|a,link,meta,script",
    "checked|input",
    "cite|blockquote,del,ins,q",
    "classid|object",
    "clear|br",
    "code|applet",
    "codebase|applet,object",
    "codetype|object",
    "color|basefont,font,hr,link",
    "cols|frameset,textarea",
    "colspan|td,th",
    "compact|dir,dl,menu,ol,ul",
    "content|meta",
    "controls|audio,video",
    "coords|a,area",
    "crossorigin|audio,img,link,script,video",
    "data|object",
    "datetime|del,ins,time",
    "declare|object",
    "decoding|img",
    "default|track",
    "defer|script",
    "dirname|input,textarea",
    "disabled|button,fieldset,input,link,optgroup,option,select,textarea",
    "disablepictureinpicture|video",
    "disableremoteplayback|audio,video",
    "download|a,area",
    "enctype|form",
    "face|basefont,font",
    "fetchpriority|img,link,script",
    "for|label,output",
    "form|button,fieldset,input,label,object,output,select,textarea",
    "formaction|button,input",
    "formenctype|button,input",
    "formmethod|button,input",
    "formnovalidate|button,input",
    "formtarget|button,input",
    "frame|table",
    "frameborder|frame,iframe",
    "headers|td,th",
    "height|applet,canvas,embed,iframe,img,input,object,source,td,th,video",
    "high|meter",
    "href|a,area,base,link",
    "hreflang|a,link",
    "hspace|applet,img,object",
    "http-equiv|meta",
    "imagesizes|link",
    "imagesrcset|link",
    "integrity|link,script",
    "ismap|img",
    "kind|track",
    "label|optgroup,option,track",
    "language|script",
    "link|body",
    "list|input",
    "loading|iframe,img",
    "longdesc|frame,iframe,img",
    "loop|audio,video",
    "low|meter",
    "marginheight|body,frame,iframe",
    "marginwidth|body,frame,iframe",
    "max|input,meter,progress",
    "maxlength|input,textarea",
    "media|link,meta,source,style",
    "method|form",
    "min|input,meter",
    "minlength|input,textarea",
    "multiple|input,select",
    "muted|audio,video",
    "name|a,applet,button,embed,fieldset,form,frame,iframe,img,input,map,meta,object,output,param,select,slot,textarea",
    "nohref|area",
    "nomodule|script",
    "noresize|frame",
    "noshade|hr",
    "novalidate|form",
    "nowrap|td,th",
    "object|applet",
    "open|details,dialog",
    "optimum|meter",
    "pattern|input",
    "ping|a,area",
    "placeholder|input,textarea",
    "playsinline|video",
    "popovertarget|button,input",
    "popovertargetaction|button,input",
    "poster|video",
    "preload|audio,video",
    "profile|head",
    "readonly|input,textarea",
    "referrerpolicy|a,area,iframe,img,link,script",
    "rel|a,area,form,link",
    "required|input,select,textarea",
    "rev|a,link",
    "reversed|ol",
    "rows|frameset,textarea",
    "rowspan|td,th",
    "rules|table",
    "sandbox|iframe",
    "scheme|meta",
    "scope|th",
    "scrolling|frame,iframe",
    "selected|option",
    "shape|a,area",
    "size|font,hr,input,select",
    "sizes|img,link,source",
    "span|col,colgroup",
    "src|audio,embed,frame,iframe,img,input,script,source,track,video",
    "srcdoc|iframe",
    "srclang|track",
    "srcset|img,source",
    "standby|object",
    "start|ol",
    "step|input",
    "summary|table",
    "target|a,area,base,form,link",
    "text|body",
    "type|a,button,embed,input,li,link,object,ol,script,source,style,ul",
    "usemap|img,input,object",
    "valign|col,colgroup,tbody,td,tfoot,th,thead,tr",
    "value|button,data,input,li,meter,option,output,param,progress,select",
    "valuetype|param",
    "version|html",
    "vlink|body",
    "vspace|applet,img,object",
    "width|applet,canvas,col,colgroup,embed,hr,iframe,img,input,object,pre,source,table,td,th,video",
    "wrap|textarea",
];

/// Attribute name to the list of tags it is valid on, decoded from `HTML_ATTRIBUTES`
pub static HTML_ATTRIBUTES_REVERSE_LOOKUP: Lazy<HashMap<&'static str, Vec<&'static str>>> =
    Lazy::new(|| {
        let mut lookup = HashMap::with_capacity(HTML_ATTRIBUTES.len());

        for encoded in HTML_ATTRIBUTES.iter().copied() {
            let Some((attr_name, tags)) = encoded.split_once('|') else {
                continue;
            };

            let tags: Vec<&'static str> = tags.split(',').filter(|tag| !tag.is_empty()).collect();
            lookup.insert(attr_name, tags);
        }

        lookup
    });
