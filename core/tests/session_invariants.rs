// core/tests/session_invariants.rs
//
// Integration tests for NameEditSession over a small custom repertoire.
//
// Tests cover:
// - The buffer is valid (or the untouched committed name) after any edit sequence
// - Rejected edits never change the buffer
// - Cancel always restores the name committed at begin_edit

use cabinetname_core::{
    AllowList, CodepointMapper, CodepointRange, EditOutcome, MappingRule, NameEditSession,
    NameValidator, SessionState,
};

static RULES: &[MappingRule] = &[
    MappingRule::Offset {
        first: '0',
        last: '9',
        target: '\u{FF10}',
    },
    MappingRule::Offset {
        first: 'a',
        last: 'z',
        target: '\u{FF41}',
    },
    MappingRule::Single {
        from: '!',
        to: '\u{FF01}',
    },
];

const MAX: usize = 5;

fn session(committed: &str) -> NameEditSession {
    let validator = NameValidator::new(
        AllowList::from_ranges(&[
            CodepointRange::new('\u{FF10}', '\u{FF19}'),
            CodepointRange::new('\u{FF41}', '\u{FF5A}'),
            CodepointRange::single('\u{FF01}'),
            CodepointRange::new('\u{3041}', '\u{3093}'),
        ]),
        MAX,
    );
    NameEditSession::new(CodepointMapper::new(RULES), validator, 0, committed)
}

// Deterministic xorshift so failures reproduce
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn raw_input(&mut self) -> String {
        const ALPHABET: &[char] = &['a', 'z', '0', '!', '?', 'あ', 'A', ' ', 'ｑ'];
        let len = (self.next() % 8) as usize;
        (0..len)
            .map(|_| ALPHABET[(self.next() % ALPHABET.len() as u64) as usize])
            .collect()
    }
}

#[test]
fn test_buffer_always_valid_after_accepted_edit() {
    let mut rng = Rng(0x9E37_79B9_7F4A_7C15);
    let mut s = session("");
    s.begin_edit();

    for _ in 0..2000 {
        let raw = rng.raw_input();
        let before = s.buffer().to_string();
        match s.keystroke(&raw) {
            EditOutcome::Accepted => {
                assert!(s.validator().validate(s.buffer()), "accepted {:?}", raw);
                assert!(s.buffer().chars().count() <= MAX);
            }
            EditOutcome::Rejected => assert_eq!(s.buffer(), before, "raw {:?}", raw),
            EditOutcome::Ignored => panic!("session left Editing"),
        }
    }
}

#[test]
fn test_cancel_after_random_edits() {
    let mut rng = Rng(42);
    for round in 0..50 {
        let committed = if round % 2 == 0 { "ｏｌｄ" } else { "Legacy Name" };
        let mut s = session(committed);
        s.begin_edit();
        for _ in 0..(round % 7) {
            s.keystroke(&rng.raw_input());
        }
        assert!(s.cancel());
        assert_eq!(s.buffer(), committed);
        assert_eq!(s.state(), SessionState::Viewing);
    }
}

#[test]
fn test_recompute_from_full_value_does_not_double_map() {
    let mut s = session("");
    s.begin_edit();
    assert_eq!(s.keystroke("ab"), EditOutcome::Accepted);
    // The field now shows the mapped text; the next change event carries it back
    let next = format!("{}c", s.buffer());
    assert_eq!(s.keystroke(&next), EditOutcome::Accepted);
    assert_eq!(s.buffer(), "ａｂｃ");
}
