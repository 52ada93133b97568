//! Rules mapping single nodes and attributes to JavaScript statements.
//!
//! Every function here is stateless: it receives the variable that holds the
//! DOM object and writes zero or more complete statements to an [`Output`].

use crate::node::Attribute;
use crate::output::Output;
use crate::utilities::{escape_text, is_event, to_camel_case};

const DATASET_PREFIX: &str = "data-";

/// How an attribute is turned into JavaScript, chosen by its key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeRule {
    /// `style`: one `style.<prop>` assignment per declaration
    Style,
    /// `class`: `className` assignment
    ClassName,
    /// `data-*`: `dataset.<key>` assignment
    Dataset,
    /// `on*` event handler: `addEventListener` call
    Event,
    /// Everything else: plain property assignment
    Property,
}

impl AttributeRule {
    pub fn for_key(key: &str) -> Self {
        match key {
            "style" => AttributeRule::Style,
            "class" => AttributeRule::ClassName,
            _ if key.starts_with(DATASET_PREFIX) => AttributeRule::Dataset,
            _ if is_event(key) => AttributeRule::Event,
            _ => AttributeRule::Property,
        }
    }
}

pub fn write_create_element(out: &mut Output, var: &str, tag: &str) {
    out.line(format_args!("var {} = document.createElement(\"{}\");", var, tag));
}

/// `text` is escaped here
pub fn write_create_text_node(out: &mut Output, var: &str, text: &str) {
    out.line(format_args!(
        "var {} = document.createTextNode(\"{}\");",
        var,
        escape_text(text)
    ));
}

pub fn write_append_child(out: &mut Output, parent: &str, var: &str) {
    out.line(format_args!("{}.appendChild({});", parent, var));
}

/// Write the statements for every attribute, in order
pub fn write_attributes(out: &mut Output, var: &str, attributes: &[Attribute]) {
    for attr in attributes {
        write_attribute(out, var, attr);
    }
}

pub fn write_attribute(out: &mut Output, var: &str, attr: &Attribute) {
    match AttributeRule::for_key(&attr.key) {
        AttributeRule::Style => write_styles(out, var, &attr.value),
        AttributeRule::ClassName => write_class_name(out, var, &attr.value),
        AttributeRule::Dataset => write_dataset(out, var, &attr.key, &attr.value),
        AttributeRule::Event => write_event_listener(out, var, &attr.key, &attr.value),
        AttributeRule::Property => write_property(out, var, &attr.key, &attr.value),
    }
}

fn write_styles(out: &mut Output, var: &str, style: &str) {
    for declaration in style.split(';') {
        let Some((property, value)) = declaration.trim().split_once(':') else {
            continue;
        };
        out.line(format_args!(
            "{}.style.{} = \"{}\";",
            var,
            to_camel_case(property.trim()),
            escape_text(value.trim())
        ));
    }
}

fn write_class_name(out: &mut Output, var: &str, class_name: &str) {
    out.line(format_args!("{}.className = \"{}\";", var, escape_text(class_name)));
}

fn write_dataset(out: &mut Output, var: &str, key: &str, value: &str) {
    let name = to_camel_case(&key[DATASET_PREFIX.len()..]);
    out.line(format_args!("{}.dataset.{} = \"{}\";", var, name, escape_text(value)));
}

// handler bodies are script, not string literals
fn write_event_listener(out: &mut Output, var: &str, key: &str, handler: &str) {
    out.line(format_args!(
        "{}.addEventListener(\"{}\", function() {{{}}}, false);",
        var,
        &key[2..],
        handler
    ));
}

fn write_property(out: &mut Output, var: &str, key: &str, value: &str) {
    let property = to_camel_case(key);
    if value.is_empty() {
        out.line(format_args!("{}.{} = true;", var, property));
    } else {
        out.line(format_args!("{}.{} = \"{}\";", var, property, escape_text(value)));
    }
}
