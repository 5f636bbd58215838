//! Dance Evolution cabinet character tables.
//!
//! The cabinet font renders full-width Latin and digits, a hiragana and a
//! katakana block, and a hand-picked set of symbols. Several symbols (the
//! Cyrillic and Greek letters, U+2200, U+2207, U+76BF, U+8278) are there for
//! kaomoji and mirror the font table as shipped; they are kept as opaque
//! singletons.

use cabinetname_core::{CodepointRange, MappingRule};

/// Keyboard input to cabinet font, in priority order.
pub static NAME_MAPPING: &[MappingRule] = &[
    MappingRule::Offset {
        first: '0',
        last: '9',
        target: '\u{FF10}',
    },
    MappingRule::Offset {
        first: 'A',
        last: 'Z',
        target: '\u{FF21}',
    },
    MappingRule::Offset {
        first: 'a',
        last: 'z',
        target: '\u{FF41}',
    },
    MappingRule::Single {
        from: '@',
        to: '\u{FF20}',
    },
    MappingRule::Single {
        from: ',',
        to: '\u{FF0C}',
    },
    MappingRule::Single {
        from: '.',
        to: '\u{FF0E}',
    },
    MappingRule::Single {
        from: ':',
        to: '\u{FF1A}',
    },
    MappingRule::Single {
        from: ';',
        to: '\u{FF1B}',
    },
    MappingRule::Single {
        from: '!',
        to: '\u{FF01}',
    },
    MappingRule::Single {
        from: '?',
        to: '\u{FF1F}',
    },
    MappingRule::Single {
        from: '+',
        to: '\u{FF0B}',
    },
    MappingRule::Single {
        from: '-',
        to: '\u{2212}',
    },
    MappingRule::Single {
        from: '#',
        to: '\u{FF03}',
    },
    MappingRule::Single {
        from: '_',
        to: '\u{FF3F}',
    },
    MappingRule::Single {
        from: '~',
        to: '\u{301C}',
    },
    MappingRule::Single {
        from: '*',
        to: '\u{FF0A}',
    },
    MappingRule::Single {
        from: '`',
        to: '\u{FF40}',
    },
    MappingRule::Single {
        from: '^',
        to: '\u{FF3E}',
    },
    MappingRule::Single {
        from: '<',
        to: '\u{FF1C}',
    },
    MappingRule::Single {
        from: '>',
        to: '\u{FF1E}',
    },
    MappingRule::Single {
        from: '(',
        to: '\u{FF08}',
    },
    MappingRule::Single {
        from: ')',
        to: '\u{FF09}',
    },
    MappingRule::Single {
        from: '/',
        to: '\u{FF0F}',
    },
];

const fn r(first: char, last: char) -> CodepointRange {
    CodepointRange::new(first, last)
}

const fn s(ch: char) -> CodepointRange {
    CodepointRange::single(ch)
}

// Full-width @A-Z, digits and the ,._ marks. Shared by both repertoires.
const WIDE_BASE: [CodepointRange; 5] = [
    r('\u{FF20}', '\u{FF3A}'),
    r('\u{FF10}', '\u{FF19}'),
    s('\u{FF0C}'),
    s('\u{FF0E}'),
    s('\u{FF3F}'),
];

const HIRAGANA: [CodepointRange; 4] = [
    r('\u{3041}', '\u{308D}'),
    s('\u{308F}'),
    s('\u{3092}'),
    s('\u{3093}'),
];

const KATAKANA: [CodepointRange; 5] = [
    r('\u{30A1}', '\u{30ED}'),
    s('\u{30EF}'),
    s('\u{30F2}'),
    s('\u{30F3}'),
    s('\u{30FC}'),
];

/// Everything the cabinet font can draw.
pub static CABINET_REPERTOIRE: &[CodepointRange] = &[
    WIDE_BASE[0],
    WIDE_BASE[1],
    WIDE_BASE[2],
    WIDE_BASE[3],
    WIDE_BASE[4],
    r('\u{FF40}', '\u{FF5A}'), // `a-z
    // Face parts
    s('\u{0437}'),
    s('\u{2200}'),
    s('\u{2207}'),
    HIRAGANA[0],
    HIRAGANA[1],
    HIRAGANA[2],
    HIRAGANA[3],
    KATAKANA[0],
    KATAKANA[1],
    KATAKANA[2],
    KATAKANA[3],
    KATAKANA[4],
    // Symbols
    s('\u{2605}'), // ★
    s('\u{266A}'), // ♪
    s('\u{FF01}'),
    s('\u{FF1F}'),
    s('\u{FF0B}'),
    s('\u{2212}'),
    s('\u{00D7}'),
    s('\u{00F7}'),
    s('\u{FF03}'),
    s('\u{3002}'),
    s('\u{2267}'),
    s('\u{2266}'),
    s('\u{0434}'),
    s('\u{0398}'),
    s('\u{25A1}'),
    s('\u{76BF}'),
    s('\u{FF1B}'),
    s('\u{FF1A}'),
    s('\u{301C}'),
    s('\u{FF0A}'),
    s('\u{00B4}'),
    s('\u{FF3E}'),
    s('\u{309C}'),
    s('\u{FF1C}'),
    s('\u{FF1E}'),
    s('\u{FF08}'),
    s('\u{FF09}'),
    s('\u{8278}'),
    s('\u{30FB}'),
    s('\u{FF0F}'),
    s('\u{309D}'), // ゝ
    s('\u{03C9}'),
    s('\u{03B5}'),
];

/// What the profile store accepts when it re-checks a saved name.
/// Narrower than the cabinet: no backtick and only two symbols.
pub static STORE_REPERTOIRE: &[CodepointRange] = &[
    WIDE_BASE[0],
    WIDE_BASE[1],
    WIDE_BASE[2],
    WIDE_BASE[3],
    WIDE_BASE[4],
    r('\u{FF41}', '\u{FF5A}'),
    HIRAGANA[0],
    HIRAGANA[1],
    HIRAGANA[2],
    HIRAGANA[3],
    KATAKANA[0],
    KATAKANA[1],
    KATAKANA[2],
    KATAKANA[3],
    KATAKANA[4],
    s('\u{2605}'),
    s('\u{266A}'),
];
