mod common;

use common::{execution, COMBINING_BYTE, SI, SO};
use execution::{DecodeState, Execution, Strategy};
use locale::PlatformProfile;
use textcore::{Encoding, ErrorCode, ProgressHandler, PropagateHandler};

/// Decodes one unit, returning the code, bytes consumed and scalars written.
fn step(exec: &Execution, input: &[u8], state: &mut DecodeState) -> (ErrorCode, usize, Vec<char>) {
    let mut out = ['\0'; 8];
    let cap = out.len();
    let result = exec.decode_one(input, &mut out, &mut PropagateHandler, state);
    let code = result.error_code;
    let consumed = input.len() - result.input.len();
    let written = cap - result.output.len();
    (code, consumed, out[..written].to_vec())
}

fn decode_all(exec: &Execution, mut input: &[u8]) -> Vec<char> {
    let mut state = exec.decode_state();
    let mut text = Vec::new();
    while !input.is_empty() {
        let (code, consumed, scalars) = step(exec, input, &mut state);
        assert_eq!(code, ErrorCode::Ok, "at {input:?}");
        text.extend(scalars);
        input = &input[consumed..];
    }
    text
}

#[test]
fn ascii_byte_decodes_to_itself() {
    let exec = execution(PlatformProfile::posix(), "C");
    let mut state = exec.decode_state();
    assert_eq!(step(&exec, &[0x41], &mut state), (ErrorCode::Ok, 1, vec!['A']));
}

#[test]
fn output_advances_by_one_scalar_per_unit() {
    for profile in [PlatformProfile::posix(), PlatformProfile::windows()] {
        for locale in ["C", "en_US.UTF-8"] {
            let exec = execution(profile.clone(), locale);
            let mut state = exec.decode_state();
            let mut out = ['\0'; 3];
            let result = exec.decode_one(b"ab", &mut out, &mut PropagateHandler, &mut state);
            assert!(result.is_ok(), "{locale}");
            assert_eq!(result.input, b"b");
            assert_eq!(result.output.len(), 2);
            assert_eq!(out[0], 'a');
        }
    }
}

#[test]
fn empty_input_with_pending_state_is_untouched() {
    let exec = execution(PlatformProfile::posix(), "xx.X-SHIFTY");
    let mut state = exec.decode_state();
    step(&exec, &[COMBINING_BYTE], &mut state);
    assert!(state.has_pending());
    assert_eq!(step(&exec, &[], &mut state), (ErrorCode::Ok, 0, vec![]));
    assert!(state.has_pending());
}

#[test]
fn truncated_lead_is_incomplete_with_one_byte_diagnostic() {
    let exec = execution(PlatformProfile::posix(), "xx.X-SHIFTY");
    let mut state = exec.decode_state();
    let mut out = ['\0'; 1];
    let mut progress = ProgressHandler::<u8>::default();
    let result = exec.decode_one(&[0x81], &mut out, &mut progress, &mut state);
    assert_eq!(result.error_code, ErrorCode::IncompleteSequence);
    assert_eq!(result.input, &[0x81]);
    assert_eq!(progress.units(), &[0x81]);
}

#[test]
fn truncated_utf8_is_incomplete() {
    let exec = execution(PlatformProfile::posix(), "en_US.UTF-8");
    let mut state = exec.decode_state();
    let mut out = ['\0'; 1];
    let mut progress = ProgressHandler::<u8>::default();
    let result = exec.decode_one(&[0xC3], &mut out, &mut progress, &mut state);
    assert_eq!(result.error_code, ErrorCode::IncompleteSequence);
    assert_eq!(progress.units(), &[0xC3]);
}

#[test]
fn unit_limit_bounds_accumulation() {
    let profile = PlatformProfile {
        mb_len_max: 1,
        ..PlatformProfile::posix()
    };
    let exec = execution(profile, "xx.X-SHIFTY");
    let input = [0x81, 0x40];
    for strategy in [Strategy::DirectNarrow, Strategy::WideBridge] {
        let mut state = exec.decode_state();
        let mut out = ['\0'; 1];
        let mut progress = ProgressHandler::<u8>::default();
        let result = exec.decode_one_with(strategy, &input, &mut out, &mut progress, &mut state);
        assert_eq!(result.error_code, ErrorCode::IncompleteSequence, "{strategy}");
        assert_eq!(result.input, &input);
        assert_eq!(result.output.len(), 1);
        assert_eq!(progress.units(), &[0x81]);
    }
}

#[test]
fn incomplete_unit_completes_when_more_input_arrives() {
    let exec = execution(PlatformProfile::posix(), "xx.X-SHIFTY");
    let mut state = exec.decode_state();
    assert_eq!(step(&exec, &[0x81], &mut state).0, ErrorCode::IncompleteSequence);
    assert_eq!(
        step(&exec, &[0x81, 0x40], &mut state),
        (ErrorCode::Ok, 2, vec!['\u{4E00}'])
    );
}

#[test]
fn invalid_unit_reports_accumulated_bytes() {
    let exec = execution(PlatformProfile::posix(), "xx.X-SHIFTY");
    let mut state = exec.decode_state();
    let mut out = ['\0'; 1];
    let mut progress = ProgressHandler::<u8>::default();
    let input = [0x81, 0x20, b'z'];
    let result = exec.decode_one(&input, &mut out, &mut progress, &mut state);
    assert_eq!(result.error_code, ErrorCode::InvalidSequence);
    assert_eq!(result.input, &input);
    assert_eq!(result.output.len(), 1);
    assert_eq!(progress.units(), &[0x81, 0x20]);
}

#[test]
fn invalid_byte_in_every_legacy_strategy() {
    for profile in [PlatformProfile::posix(), PlatformProfile::windows()] {
        let exec = execution(profile, "C");
        let mut state = exec.decode_state();
        let mut out = ['\0'; 1];
        let mut progress = ProgressHandler::<u8>::default();
        let result = exec.decode_one(&[0xE9, b'a'], &mut out, &mut progress, &mut state);
        assert_eq!(result.error_code, ErrorCode::InvalidSequence);
        assert_eq!(result.input, &[0xE9, b'a']);
        assert_eq!(progress.units(), &[0xE9]);
    }
}

#[test]
fn shift_sequences_persist_across_calls() {
    let exec = execution(PlatformProfile::posix(), "el.X-SHIFTY");
    let mut state = exec.decode_state();
    assert_eq!(step(&exec, &[SO, b'a'], &mut state), (ErrorCode::Ok, 1, vec![]));
    assert!(!state.is_neutral());
    assert_eq!(step(&exec, &[b'a'], &mut state), (ErrorCode::Ok, 1, vec!['α']));
    assert_eq!(step(&exec, &[b'b'], &mut state), (ErrorCode::Ok, 1, vec!['β']));
    assert_eq!(step(&exec, &[SI], &mut state), (ErrorCode::Ok, 1, vec![]));
    assert_eq!(step(&exec, &[b'a'], &mut state), (ErrorCode::Ok, 1, vec!['a']));
    assert!(state.is_neutral());
}

#[test]
fn shifted_text_decodes_in_order() {
    let exec = execution(PlatformProfile::posix(), "el.X-SHIFTY");
    let input = [b'x', SO, b'a', b'b', b'.', SI, b'y', 0x82, 0x41];
    assert_eq!(
        decode_all(&exec, &input),
        vec!['x', 'α', 'β', '.', 'y', '\u{4EBE}']
    );
}

#[test]
fn nul_writes_nothing_and_resets_shift() {
    let exec = execution(PlatformProfile::posix(), "el.X-SHIFTY");
    let mut state = exec.decode_state();
    step(&exec, &[SO], &mut state);
    assert!(!state.is_neutral());
    assert_eq!(step(&exec, &[0, b'a'], &mut state), (ErrorCode::Ok, 1, vec![]));
    assert!(state.is_neutral());
}

#[test]
fn multi_result_unit_drains_through_pending_output() {
    let exec = execution(PlatformProfile::posix(), "xx.X-SHIFTY");
    let mut state = exec.decode_state();
    assert_eq!(
        step(&exec, &[COMBINING_BYTE, b'z'], &mut state),
        (ErrorCode::Ok, 1, vec!['e'])
    );
    assert!(state.has_pending());
    assert_eq!(step(&exec, b"z", &mut state), (ErrorCode::Ok, 0, vec!['\u{301}']));
    assert!(!state.has_pending());
    assert_eq!(step(&exec, b"z", &mut state), (ErrorCode::Ok, 1, vec!['z']));
}

#[test]
fn drain_one_flushes_at_end_of_input() {
    let exec = execution(PlatformProfile::posix(), "xx.X-SHIFTY");
    let mut state = exec.decode_state();
    step(&exec, &[COMBINING_BYTE], &mut state);

    let mut out = ['\0'; 1];
    let result = exec.drain_one(&mut out, &mut PropagateHandler, &mut state);
    assert!(result.is_ok());
    assert!(result.output.is_empty());
    assert_eq!(out[0], '\u{301}');
    assert!(state.is_neutral());
}

#[test]
fn drain_needs_output_space() {
    let exec = execution(PlatformProfile::posix(), "xx.X-SHIFTY");
    let mut state = exec.decode_state();
    step(&exec, &[COMBINING_BYTE], &mut state);

    let mut out: [char; 0] = [];
    let result = exec.drain_one(&mut out, &mut PropagateHandler, &mut state);
    assert_eq!(result.error_code, ErrorCode::InsufficientOutputSpace);
    assert!(state.has_pending());
}

#[test]
fn pending_output_lost_to_locale_change_is_invalid() {
    let exec = execution(PlatformProfile::posix(), "xx.X-SHIFTY");
    let mut state = exec.decode_state();
    step(&exec, &[COMBINING_BYTE], &mut state);
    exec.host().set_locale("C").unwrap();
    assert_eq!(
        step(&exec, b"a", &mut state),
        (ErrorCode::InvalidSequence, 0, vec![])
    );
    assert!(!state.has_pending());
}

#[test]
fn wide_bridge_stashes_extra_scalars() {
    let exec = execution(PlatformProfile::windows(), "xx.X-SHIFTY");
    assert_eq!(exec.strategy(), Strategy::WideBridge);
    let mut state = exec.decode_state();
    assert_eq!(
        step(&exec, &[COMBINING_BYTE, b'z'], &mut state),
        (ErrorCode::Ok, 1, vec!['e'])
    );
    assert!(state.has_pending());
    assert!(state.shift().is_initial());
    assert_eq!(step(&exec, b"z", &mut state), (ErrorCode::Ok, 0, vec!['\u{301}']));
    assert!(state.is_neutral());
}

#[test]
fn wide_bridge_decodes_nul_as_scalar() {
    let exec = execution(PlatformProfile::windows(), "English_United States.1252");
    let mut state = exec.decode_state();
    assert_eq!(step(&exec, &[0], &mut state), (ErrorCode::Ok, 1, vec!['\0']));
}

#[test]
fn wide_bridge_maps_code_page() {
    let exec = execution(PlatformProfile::windows(), "English_United States.1252");
    assert_eq!(decode_all(&exec, b"\x80 \x93x\x94"), vec!['€', ' ', '“', 'x', '”']);
}

#[test]
fn wide_bridge_rejects_undefined_code_point() {
    let exec = execution(PlatformProfile::windows(), "English_United States.1252");
    let mut state = exec.decode_state();
    assert_eq!(
        step(&exec, &[0x81], &mut state),
        (ErrorCode::InvalidSequence, 0, vec![])
    );
}

#[test]
fn wide_bridge_accumulates_double_byte_units() {
    let exec = execution(PlatformProfile::windows(), "xx.X-SHIFTY");
    let mut state = exec.decode_state();
    assert_eq!(
        step(&exec, &[0x81], &mut state),
        (ErrorCode::IncompleteSequence, 0, vec![])
    );
    assert_eq!(
        step(&exec, &[0x81, 0x41], &mut state),
        (ErrorCode::Ok, 2, vec!['\u{4E01}'])
    );
}

#[test]
fn locale_change_is_seen_by_next_call() {
    let exec = execution(PlatformProfile::posix(), "C");
    let mut state = exec.decode_state();
    assert_eq!(step(&exec, &[0xE9], &mut state).0, ErrorCode::InvalidSequence);

    exec.host().set_locale("fr_FR.ISO-8859-1").unwrap();
    let mut state = exec.decode_state();
    assert_eq!(step(&exec, &[0xE9], &mut state), (ErrorCode::Ok, 1, vec!['é']));

    exec.host().set_locale("fr_FR.UTF-8").unwrap();
    assert_eq!(
        step(&exec, "é".as_bytes(), &mut state),
        (ErrorCode::Ok, 2, vec!['é'])
    );
}

#[test]
fn forced_strategies_agree_on_latin1() {
    let exec = execution(PlatformProfile::posix(), "de_DE");
    let input = b"\xC4rger";
    for strategy in [Strategy::WideBridge, Strategy::DirectNarrow] {
        let mut state = exec.decode_state();
        let mut out = ['\0'; 1];
        let result = exec.decode_one_with(strategy, input, &mut out, &mut PropagateHandler, &mut state);
        assert!(result.is_ok());
        assert_eq!(result.input, b"rger");
        assert_eq!(out[0], 'Ä');
    }
}
