//! HTML element names.
//!
//! [§ 4 The elements of HTML](https://html.spec.whatwg.org/multipage/#toc-semantics)
//!
//! A closed set of the elements defined by the HTML Standard. Names outside
//! the set (custom elements, SVG, `MathML`, obsolete elements) have no
//! [`TagName`]; tables keyed by tag name treat them as unknown.

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// An element name defined by the HTML Standard.
///
/// Parsing is ASCII case-insensitive; display is lowercase.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumString,
    EnumIter,
    Serialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum TagName {
    /// `<a>`
    A,
    /// `<abbr>`
    Abbr,
    /// `<address>`
    Address,
    /// `<area>`
    Area,
    /// `<article>`
    Article,
    /// `<aside>`
    Aside,
    /// `<audio>`
    Audio,
    /// `<b>`
    B,
    /// `<base>`
    Base,
    /// `<bdi>`
    Bdi,
    /// `<bdo>`
    Bdo,
    /// `<blockquote>`
    Blockquote,
    /// `<body>`
    Body,
    /// `<br>`
    Br,
    /// `<button>`
    Button,
    /// `<canvas>`
    Canvas,
    /// `<caption>`
    Caption,
    /// `<cite>`
    Cite,
    /// `<code>`
    Code,
    /// `<col>`
    Col,
    /// `<colgroup>`
    Colgroup,
    /// `<data>`
    Data,
    /// `<datalist>`
    Datalist,
    /// `<dd>`
    Dd,
    /// `<del>`
    Del,
    /// `<details>`
    Details,
    /// `<dfn>`
    Dfn,
    /// `<dialog>`
    Dialog,
    /// `<div>`
    Div,
    /// `<dl>`
    Dl,
    /// `<dt>`
    Dt,
    /// `<em>`
    Em,
    /// `<embed>`
    Embed,
    /// `<fieldset>`
    Fieldset,
    /// `<figcaption>`
    Figcaption,
    /// `<figure>`
    Figure,
    /// `<footer>`
    Footer,
    /// `<form>`
    Form,
    /// `<h1>`
    H1,
    /// `<h2>`
    H2,
    /// `<h3>`
    H3,
    /// `<h4>`
    H4,
    /// `<h5>`
    H5,
    /// `<h6>`
    H6,
    /// `<head>`
    Head,
    /// `<header>`
    Header,
    /// `<hgroup>`
    Hgroup,
    /// `<hr>`
    Hr,
    /// `<html>`
    Html,
    /// `<i>`
    I,
    /// `<iframe>`
    Iframe,
    /// `<img>`
    Img,
    /// `<input>`
    Input,
    /// `<ins>`
    Ins,
    /// `<kbd>`
    Kbd,
    /// `<label>`
    Label,
    /// `<legend>`
    Legend,
    /// `<li>`
    Li,
    /// `<link>`
    Link,
    /// `<main>`
    Main,
    /// `<map>`
    Map,
    /// `<mark>`
    Mark,
    /// `<menu>`
    Menu,
    /// `<meta>`
    Meta,
    /// `<meter>`
    Meter,
    /// `<nav>`
    Nav,
    /// `<noscript>`
    Noscript,
    /// `<object>`
    Object,
    /// `<ol>`
    Ol,
    /// `<optgroup>`
    Optgroup,
    /// `<option>`
    Option,
    /// `<output>`
    Output,
    /// `<p>`
    P,
    /// `<picture>`
    Picture,
    /// `<pre>`
    Pre,
    /// `<progress>`
    Progress,
    /// `<q>`
    Q,
    /// `<rp>`
    Rp,
    /// `<rt>`
    Rt,
    /// `<ruby>`
    Ruby,
    /// `<s>`
    S,
    /// `<samp>`
    Samp,
    /// `<script>`
    Script,
    /// `<search>`
    Search,
    /// `<section>`
    Section,
    /// `<select>`
    Select,
    /// `<slot>`
    Slot,
    /// `<small>`
    Small,
    /// `<source>`
    Source,
    /// `<span>`
    Span,
    /// `<strong>`
    Strong,
    /// `<style>`
    Style,
    /// `<sub>`
    Sub,
    /// `<summary>`
    Summary,
    /// `<sup>`
    Sup,
    /// `<table>`
    Table,
    /// `<tbody>`
    Tbody,
    /// `<td>`
    Td,
    /// `<template>`
    Template,
    /// `<textarea>`
    Textarea,
    /// `<tfoot>`
    Tfoot,
    /// `<th>`
    Th,
    /// `<thead>`
    Thead,
    /// `<time>`
    Time,
    /// `<title>`
    Title,
    /// `<tr>`
    Tr,
    /// `<track>`
    Track,
    /// `<u>`
    U,
    /// `<ul>`
    Ul,
    /// `<var>`
    Var,
    /// `<video>`
    Video,
    /// `<wbr>`
    Wbr,
}

impl TagName {
    /// Look up an element by name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
    ///
    /// "Void elements: area, base, br, col, embed, hr, img, input, link, meta,
    /// source, track, wbr"
    #[must_use]
    pub const fn is_void(self) -> bool {
        matches!(
            self,
            Self::Area
                | Self::Base
                | Self::Br
                | Self::Col
                | Self::Embed
                | Self::Hr
                | Self::Img
                | Self::Input
                | Self::Link
                | Self::Meta
                | Self::Source
                | Self::Track
                | Self::Wbr
        )
    }
}

/// Returns true if `name` is an element defined by the HTML Standard,
/// ignoring ASCII case.
#[must_use]
pub fn is_known_element(name: &str) -> bool {
    TagName::from_name(name).is_some()
}

/// Returns true if `name` is an HTML void element, ignoring ASCII case.
#[must_use]
pub fn is_void_element(name: &str) -> bool {
    TagName::from_name(name).is_some_and(TagName::is_void)
}
