//! Named character reference table.
//!
//! [§ 13.5 Named character references](https://html.spec.whatwg.org/multipage/named-characters.html)
//!
//! The full table defines 2,231 names. This one carries every HTML 4 name
//! (Latin-1, symbols, Greek, and the special set), a handful of common HTML5
//! additions, and all legacy names that may appear without a semicolon.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Length of the longest legacy (semicolon-less) name.
pub(crate) const LONGEST_LEGACY_NAME: usize = 6;

/// Maps entity names (without the leading '&') to their replacement strings.
///
/// Names are stored with their trailing semicolon. Legacy names are also
/// stored without it, e.g. both "amp;" and "amp".
static NAMED_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Markup-significant
        ("quot;", "\""),
        ("amp;", "&"),
        ("lt;", "<"),
        ("gt;", ">"),
        // Latin-1 (U+00A0..U+00FF)
        ("nbsp;", "\u{00A0}"),
        ("iexcl;", "\u{00A1}"), // ¡
        ("cent;", "\u{00A2}"), // ¢
        ("pound;", "\u{00A3}"), // £
        ("curren;", "\u{00A4}"), // ¤
        ("yen;", "\u{00A5}"), // ¥
        ("brvbar;", "\u{00A6}"), // ¦
        ("sect;", "\u{00A7}"), // §
        ("uml;", "\u{00A8}"), // ¨
        ("copy;", "\u{00A9}"), // ©
        ("ordf;", "\u{00AA}"), // ª
        ("laquo;", "\u{00AB}"), // «
        ("not;", "\u{00AC}"), // ¬
        ("shy;", "\u{00AD}"),
        ("reg;", "\u{00AE}"), // ®
        ("macr;", "\u{00AF}"), // ¯
        ("deg;", "\u{00B0}"), // °
        ("plusmn;", "\u{00B1}"), // ±
        ("sup2;", "\u{00B2}"), // ²
        ("sup3;", "\u{00B3}"), // ³
        ("acute;", "\u{00B4}"), // ´
        ("micro;", "\u{00B5}"), // µ
        ("para;", "\u{00B6}"), // ¶
        ("middot;", "\u{00B7}"), // ·
        ("cedil;", "\u{00B8}"), // ¸
        ("sup1;", "\u{00B9}"), // ¹
        ("ordm;", "\u{00BA}"), // º
        ("raquo;", "\u{00BB}"), // »
        ("frac14;", "\u{00BC}"), // ¼
        ("frac12;", "\u{00BD}"), // ½
        ("frac34;", "\u{00BE}"), // ¾
        ("iquest;", "\u{00BF}"), // ¿
        ("Agrave;", "\u{00C0}"), // À
        ("Aacute;", "\u{00C1}"), // Á
        ("Acirc;", "\u{00C2}"), // Â
        ("Atilde;", "\u{00C3}"), // Ã
        ("Auml;", "\u{00C4}"), // Ä
        ("Aring;", "\u{00C5}"), // Å
        ("AElig;", "\u{00C6}"), // Æ
        ("Ccedil;", "\u{00C7}"), // Ç
        ("Egrave;", "\u{00C8}"), // È
        ("Eacute;", "\u{00C9}"), // É
        ("Ecirc;", "\u{00CA}"), // Ê
        ("Euml;", "\u{00CB}"), // Ë
        ("Igrave;", "\u{00CC}"), // Ì
        ("Iacute;", "\u{00CD}"), // Í
        ("Icirc;", "\u{00CE}"), // Î
        ("Iuml;", "\u{00CF}"), // Ï
        ("ETH;", "\u{00D0}"), // Ð
        ("Ntilde;", "\u{00D1}"), // Ñ
        ("Ograve;", "\u{00D2}"), // Ò
        ("Oacute;", "\u{00D3}"), // Ó
        ("Ocirc;", "\u{00D4}"), // Ô
        ("Otilde;", "\u{00D5}"), // Õ
        ("Ouml;", "\u{00D6}"), // Ö
        ("times;", "\u{00D7}"), // ×
        ("Oslash;", "\u{00D8}"), // Ø
        ("Ugrave;", "\u{00D9}"), // Ù
        ("Uacute;", "\u{00DA}"), // Ú
        ("Ucirc;", "\u{00DB}"), // Û
        ("Uuml;", "\u{00DC}"), // Ü
        ("Yacute;", "\u{00DD}"), // Ý
        ("THORN;", "\u{00DE}"), // Þ
        ("szlig;", "\u{00DF}"), // ß
        ("agrave;", "\u{00E0}"), // à
        ("aacute;", "\u{00E1}"), // á
        ("acirc;", "\u{00E2}"), // â
        ("atilde;", "\u{00E3}"), // ã
        ("auml;", "\u{00E4}"), // ä
        ("aring;", "\u{00E5}"), // å
        ("aelig;", "\u{00E6}"), // æ
        ("ccedil;", "\u{00E7}"), // ç
        ("egrave;", "\u{00E8}"), // è
        ("eacute;", "\u{00E9}"), // é
        ("ecirc;", "\u{00EA}"), // ê
        ("euml;", "\u{00EB}"), // ë
        ("igrave;", "\u{00EC}"), // ì
        ("iacute;", "\u{00ED}"), // í
        ("icirc;", "\u{00EE}"), // î
        ("iuml;", "\u{00EF}"), // ï
        ("eth;", "\u{00F0}"), // ð
        ("ntilde;", "\u{00F1}"), // ñ
        ("ograve;", "\u{00F2}"), // ò
        ("oacute;", "\u{00F3}"), // ó
        ("ocirc;", "\u{00F4}"), // ô
        ("otilde;", "\u{00F5}"), // õ
        ("ouml;", "\u{00F6}"), // ö
        ("divide;", "\u{00F7}"), // ÷
        ("oslash;", "\u{00F8}"), // ø
        ("ugrave;", "\u{00F9}"), // ù
        ("uacute;", "\u{00FA}"), // ú
        ("ucirc;", "\u{00FB}"), // û
        ("uuml;", "\u{00FC}"), // ü
        ("yacute;", "\u{00FD}"), // ý
        ("thorn;", "\u{00FE}"), // þ
        ("yuml;", "\u{00FF}"), // ÿ
        // Latin Extended and spacing modifiers
        ("OElig;", "\u{0152}"), // Œ
        ("oelig;", "\u{0153}"), // œ
        ("Scaron;", "\u{0160}"), // Š
        ("scaron;", "\u{0161}"), // š
        ("Yuml;", "\u{0178}"), // Ÿ
        ("fnof;", "\u{0192}"), // ƒ
        ("circ;", "\u{02C6}"), // ˆ
        ("tilde;", "\u{02DC}"), // ˜
        // Greek
        ("Alpha;", "\u{0391}"), // Α
        ("Beta;", "\u{0392}"), // Β
        ("Gamma;", "\u{0393}"), // Γ
        ("Delta;", "\u{0394}"), // Δ
        ("Epsilon;", "\u{0395}"), // Ε
        ("Zeta;", "\u{0396}"), // Ζ
        ("Eta;", "\u{0397}"), // Η
        ("Theta;", "\u{0398}"), // Θ
        ("Iota;", "\u{0399}"), // Ι
        ("Kappa;", "\u{039A}"), // Κ
        ("Lambda;", "\u{039B}"), // Λ
        ("Mu;", "\u{039C}"), // Μ
        ("Nu;", "\u{039D}"), // Ν
        ("Xi;", "\u{039E}"), // Ξ
        ("Omicron;", "\u{039F}"), // Ο
        ("Pi;", "\u{03A0}"), // Π
        ("Rho;", "\u{03A1}"), // Ρ
        ("Sigma;", "\u{03A3}"), // Σ
        ("Tau;", "\u{03A4}"), // Τ
        ("Upsilon;", "\u{03A5}"), // Υ
        ("Phi;", "\u{03A6}"), // Φ
        ("Chi;", "\u{03A7}"), // Χ
        ("Psi;", "\u{03A8}"), // Ψ
        ("Omega;", "\u{03A9}"), // Ω
        ("alpha;", "\u{03B1}"), // α
        ("beta;", "\u{03B2}"), // β
        ("gamma;", "\u{03B3}"), // γ
        ("delta;", "\u{03B4}"), // δ
        ("epsilon;", "\u{03B5}"), // ε
        ("zeta;", "\u{03B6}"), // ζ
        ("eta;", "\u{03B7}"), // η
        ("theta;", "\u{03B8}"), // θ
        ("iota;", "\u{03B9}"), // ι
        ("kappa;", "\u{03BA}"), // κ
        ("lambda;", "\u{03BB}"), // λ
        ("mu;", "\u{03BC}"), // μ
        ("nu;", "\u{03BD}"), // ν
        ("xi;", "\u{03BE}"), // ξ
        ("omicron;", "\u{03BF}"), // ο
        ("pi;", "\u{03C0}"), // π
        ("rho;", "\u{03C1}"), // ρ
        ("sigmaf;", "\u{03C2}"), // ς
        ("sigma;", "\u{03C3}"), // σ
        ("tau;", "\u{03C4}"), // τ
        ("upsilon;", "\u{03C5}"), // υ
        ("phi;", "\u{03C6}"), // φ
        ("chi;", "\u{03C7}"), // χ
        ("psi;", "\u{03C8}"), // ψ
        ("omega;", "\u{03C9}"), // ω
        ("thetasym;", "\u{03D1}"), // ϑ
        ("upsih;", "\u{03D2}"), // ϒ
        ("piv;", "\u{03D6}"), // ϖ
        // General punctuation
        ("ensp;", "\u{2002}"),
        ("emsp;", "\u{2003}"),
        ("thinsp;", "\u{2009}"),
        ("zwnj;", "\u{200C}"),
        ("zwj;", "\u{200D}"),
        ("lrm;", "\u{200E}"),
        ("rlm;", "\u{200F}"),
        ("ndash;", "\u{2013}"), // –
        ("mdash;", "\u{2014}"), // —
        ("lsquo;", "\u{2018}"), // ‘
        ("rsquo;", "\u{2019}"), // ’
        ("sbquo;", "\u{201A}"), // ‚
        ("ldquo;", "\u{201C}"), // “
        ("rdquo;", "\u{201D}"), // ”
        ("bdquo;", "\u{201E}"), // „
        ("dagger;", "\u{2020}"), // †
        ("Dagger;", "\u{2021}"), // ‡
        ("bull;", "\u{2022}"), // •
        ("hellip;", "\u{2026}"), // …
        ("permil;", "\u{2030}"), // ‰
        ("prime;", "\u{2032}"), // ′
        ("Prime;", "\u{2033}"), // ″
        ("lsaquo;", "\u{2039}"), // ‹
        ("rsaquo;", "\u{203A}"), // ›
        ("oline;", "\u{203E}"), // ‾
        ("frasl;", "\u{2044}"), // ⁄
        // Currency and letterlike symbols
        ("euro;", "\u{20AC}"), // €
        ("image;", "\u{2111}"), // ℑ
        ("weierp;", "\u{2118}"), // ℘
        ("real;", "\u{211C}"), // ℜ
        ("trade;", "\u{2122}"), // ™
        ("alefsym;", "\u{2135}"), // ℵ
        // Arrows
        ("larr;", "\u{2190}"), // ←
        ("uarr;", "\u{2191}"), // ↑
        ("rarr;", "\u{2192}"), // →
        ("darr;", "\u{2193}"), // ↓
        ("harr;", "\u{2194}"), // ↔
        ("crarr;", "\u{21B5}"), // ↵
        ("lArr;", "\u{21D0}"), // ⇐
        ("uArr;", "\u{21D1}"), // ⇑
        ("rArr;", "\u{21D2}"), // ⇒
        ("dArr;", "\u{21D3}"), // ⇓
        ("hArr;", "\u{21D4}"), // ⇔
        // Mathematical operators
        ("forall;", "\u{2200}"), // ∀
        ("part;", "\u{2202}"), // ∂
        ("exist;", "\u{2203}"), // ∃
        ("empty;", "\u{2205}"), // ∅
        ("nabla;", "\u{2207}"), // ∇
        ("isin;", "\u{2208}"), // ∈
        ("notin;", "\u{2209}"), // ∉
        ("ni;", "\u{220B}"), // ∋
        ("prod;", "\u{220F}"), // ∏
        ("sum;", "\u{2211}"), // ∑
        ("minus;", "\u{2212}"), // −
        ("lowast;", "\u{2217}"), // ∗
        ("radic;", "\u{221A}"), // √
        ("prop;", "\u{221D}"), // ∝
        ("infin;", "\u{221E}"), // ∞
        ("ang;", "\u{2220}"), // ∠
        ("and;", "\u{2227}"), // ∧
        ("or;", "\u{2228}"), // ∨
        ("cap;", "\u{2229}"), // ∩
        ("cup;", "\u{222A}"), // ∪
        ("int;", "\u{222B}"), // ∫
        ("there4;", "\u{2234}"), // ∴
        ("sim;", "\u{223C}"), // ∼
        ("cong;", "\u{2245}"), // ≅
        ("asymp;", "\u{2248}"), // ≈
        ("ne;", "\u{2260}"), // ≠
        ("equiv;", "\u{2261}"), // ≡
        ("le;", "\u{2264}"), // ≤
        ("ge;", "\u{2265}"), // ≥
        ("sub;", "\u{2282}"), // ⊂
        ("sup;", "\u{2283}"), // ⊃
        ("nsub;", "\u{2284}"), // ⊄
        ("sube;", "\u{2286}"), // ⊆
        ("supe;", "\u{2287}"), // ⊇
        ("oplus;", "\u{2295}"), // ⊕
        ("otimes;", "\u{2297}"), // ⊗
        ("perp;", "\u{22A5}"), // ⊥
        ("sdot;", "\u{22C5}"), // ⋅
        // Technical, shapes, and card suits
        ("lceil;", "\u{2308}"), // ⌈
        ("rceil;", "\u{2309}"), // ⌉
        ("lfloor;", "\u{230A}"), // ⌊
        ("rfloor;", "\u{230B}"), // ⌋
        ("lang;", "\u{27E8}"), // ⟨
        ("rang;", "\u{27E9}"), // ⟩
        ("loz;", "\u{25CA}"), // ◊
        ("spades;", "\u{2660}"), // ♠
        ("clubs;", "\u{2663}"), // ♣
        ("hearts;", "\u{2665}"), // ♥
        ("diams;", "\u{2666}"), // ♦
        // HTML5 additions
        ("apos;", "'"),
        ("Tab;", "\u{0009}"),
        ("NewLine;", "\u{000A}"),
        ("fjlig;", "fj"),
        ("dollar;", "$"),
        ("excl;", "!"),
        ("num;", "#"),
        ("percnt;", "%"),
        ("lpar;", "("),
        ("rpar;", ")"),
        ("ast;", "*"),
        ("plus;", "+"),
        ("comma;", ","),
        ("period;", "."),
        ("sol;", "/"),
        ("colon;", ":"),
        ("semi;", ";"),
        ("equals;", "="),
        ("quest;", "?"),
        ("commat;", "@"),
        ("lsqb;", "["),
        ("rsqb;", "]"),
        ("bsol;", "\\"),
        ("lowbar;", "_"),
        ("grave;", "`"),
        ("lcub;", "{"),
        ("rcub;", "}"),
        ("verbar;", "|"),
        ("vert;", "|"),
        ("Hat;", "^"),
        ("ZeroWidthSpace;", "\u{200B}"),
        ("rightarrow;", "\u{2192}"), // →
        ("leftarrow;", "\u{2190}"), // ←
        ("check;", "\u{2713}"), // ✓
        ("cross;", "\u{2717}"), // ✗
        ("star;", "\u{2606}"), // ☆
        ("starf;", "\u{2605}"), // ★
        ("phone;", "\u{260E}"), // ☎
        ("female;", "\u{2640}"), // ♀
        ("male;", "\u{2642}"), // ♂
        ("QUOT;", "\""),
        ("AMP;", "&"),
        ("LT;", "<"),
        ("GT;", ">"),
        ("COPY;", "\u{00A9}"), // ©
        ("REG;", "\u{00AE}"), // ®
        // Legacy names, recognized without a trailing semicolon
        ("QUOT", "\""),
        ("quot", "\""),
        ("AMP", "&"),
        ("amp", "&"),
        ("LT", "<"),
        ("lt", "<"),
        ("GT", ">"),
        ("gt", ">"),
        ("nbsp", "\u{00A0}"),
        ("iexcl", "\u{00A1}"),
        ("cent", "\u{00A2}"),
        ("pound", "\u{00A3}"),
        ("curren", "\u{00A4}"),
        ("yen", "\u{00A5}"),
        ("brvbar", "\u{00A6}"),
        ("sect", "\u{00A7}"),
        ("uml", "\u{00A8}"),
        ("COPY", "\u{00A9}"),
        ("copy", "\u{00A9}"),
        ("ordf", "\u{00AA}"),
        ("laquo", "\u{00AB}"),
        ("not", "\u{00AC}"),
        ("shy", "\u{00AD}"),
        ("REG", "\u{00AE}"),
        ("reg", "\u{00AE}"),
        ("macr", "\u{00AF}"),
        ("deg", "\u{00B0}"),
        ("plusmn", "\u{00B1}"),
        ("sup2", "\u{00B2}"),
        ("sup3", "\u{00B3}"),
        ("acute", "\u{00B4}"),
        ("micro", "\u{00B5}"),
        ("para", "\u{00B6}"),
        ("middot", "\u{00B7}"),
        ("cedil", "\u{00B8}"),
        ("sup1", "\u{00B9}"),
        ("ordm", "\u{00BA}"),
        ("raquo", "\u{00BB}"),
        ("frac14", "\u{00BC}"),
        ("frac12", "\u{00BD}"),
        ("frac34", "\u{00BE}"),
        ("iquest", "\u{00BF}"),
        ("Agrave", "\u{00C0}"),
        ("Aacute", "\u{00C1}"),
        ("Acirc", "\u{00C2}"),
        ("Atilde", "\u{00C3}"),
        ("Auml", "\u{00C4}"),
        ("Aring", "\u{00C5}"),
        ("AElig", "\u{00C6}"),
        ("Ccedil", "\u{00C7}"),
        ("Egrave", "\u{00C8}"),
        ("Eacute", "\u{00C9}"),
        ("Ecirc", "\u{00CA}"),
        ("Euml", "\u{00CB}"),
        ("Igrave", "\u{00CC}"),
        ("Iacute", "\u{00CD}"),
        ("Icirc", "\u{00CE}"),
        ("Iuml", "\u{00CF}"),
        ("ETH", "\u{00D0}"),
        ("Ntilde", "\u{00D1}"),
        ("Ograve", "\u{00D2}"),
        ("Oacute", "\u{00D3}"),
        ("Ocirc", "\u{00D4}"),
        ("Otilde", "\u{00D5}"),
        ("Ouml", "\u{00D6}"),
        ("times", "\u{00D7}"),
        ("Oslash", "\u{00D8}"),
        ("Ugrave", "\u{00D9}"),
        ("Uacute", "\u{00DA}"),
        ("Ucirc", "\u{00DB}"),
        ("Uuml", "\u{00DC}"),
        ("Yacute", "\u{00DD}"),
        ("THORN", "\u{00DE}"),
        ("szlig", "\u{00DF}"),
        ("agrave", "\u{00E0}"),
        ("aacute", "\u{00E1}"),
        ("acirc", "\u{00E2}"),
        ("atilde", "\u{00E3}"),
        ("auml", "\u{00E4}"),
        ("aring", "\u{00E5}"),
        ("aelig", "\u{00E6}"),
        ("ccedil", "\u{00E7}"),
        ("egrave", "\u{00E8}"),
        ("eacute", "\u{00E9}"),
        ("ecirc", "\u{00EA}"),
        ("euml", "\u{00EB}"),
        ("igrave", "\u{00EC}"),
        ("iacute", "\u{00ED}"),
        ("icirc", "\u{00EE}"),
        ("iuml", "\u{00EF}"),
        ("eth", "\u{00F0}"),
        ("ntilde", "\u{00F1}"),
        ("ograve", "\u{00F2}"),
        ("oacute", "\u{00F3}"),
        ("ocirc", "\u{00F4}"),
        ("otilde", "\u{00F5}"),
        ("ouml", "\u{00F6}"),
        ("divide", "\u{00F7}"),
        ("oslash", "\u{00F8}"),
        ("ugrave", "\u{00F9}"),
        ("uacute", "\u{00FA}"),
        ("ucirc", "\u{00FB}"),
        ("uuml", "\u{00FC}"),
        ("yacute", "\u{00FD}"),
        ("thorn", "\u{00FE}"),
        ("yuml", "\u{00FF}"),
    ])
});

/// Look up a named character reference.
///
/// The `name` should NOT include the leading '&'. Include the trailing ';'
/// unless looking up a legacy name.
///
/// # Example
/// ```
/// use wren_html::entities::lookup_entity;
///
/// assert_eq!(lookup_entity("amp;"), Some("&"));
/// assert_eq!(lookup_entity("amp"), Some("&"));
/// assert_eq!(lookup_entity("hellip"), None);
/// ```
#[must_use]
pub fn lookup_entity(name: &str) -> Option<&'static str> {
    NAMED_ENTITIES.get(name).copied()
}

/// Returns true if `name` (with its trailing ';') is a known named character
/// reference.
#[must_use]
pub fn is_entity_name(name: &str) -> bool {
    name.len() > 1 && name.ends_with(';') && NAMED_ENTITIES.contains_key(name)
}

/// Number of entries in the table, counting legacy spellings separately.
#[must_use]
pub fn entity_count() -> usize {
    NAMED_ENTITIES.len()
}
